//! Cross-compiler behavior: skipping, chaining and determinism.

use crate::{
    Changes, Filter, QueryError, Range, Statement, Value, compile_filter, compile_key_predicate,
    compile_pagination, compile_update_set,
};

#[test]
fn all_absent_filter_matches_everything() {
    let filter = Filter::new()
        .eq_opt("asset_id", None::<i32>)
        .eq("state_id", Value::Null)
        .range_opt("logged_at", None);

    for start in [1, 4, 17] {
        let f = compile_filter(&filter, start);
        assert_eq!(f.text, "");
        assert!(f.values.is_empty());
        assert_eq!(f.next_index, start);
    }
}

#[test]
fn empty_filter_matches_everything() {
    let f = compile_filter(&Filter::new(), 1);
    assert!(f.is_empty());
    assert_eq!(f.next_index, 1);
}

#[test]
fn n_scalars_use_n_placeholders_in_order() {
    let filter = Filter::new()
        .eq("asset_id", 3)
        .eq_opt("product_id", None::<i32>)
        .eq("count_type_id", 5)
        .eq("production_log_id", 8);

    let f = compile_filter(&filter, 2);
    assert_eq!(
        f.text,
        "WHERE asset_id = $2 AND count_type_id = $3 AND production_log_id = $4"
    );
    assert_eq!(f.values, vec![Value::Int(3), Value::Int(5), Value::Int(8)]);
    assert_eq!(f.next_index, 2 + 3);
}

#[test]
fn full_range_emits_lower_then_upper() {
    let filter = Filter::new().range("logged_at", Range::between("a", "b"));
    let f = compile_filter(&filter, 1);
    assert_eq!(f.text, "WHERE logged_at >= $1 AND logged_at <= $2");
    assert_eq!(f.next_index, 3);
}

#[test]
fn half_open_range_emits_one_conjunct() {
    let filter = Filter::new().range("logged_at", Range::since("a"));
    let f = compile_filter(&filter, 1);
    assert_eq!(f.text, "WHERE logged_at >= $1");
    assert!(!f.text.contains("<="));
    assert_eq!(f.next_index, 2);
}

#[test]
fn false_and_zero_are_filtered_on_not_skipped() {
    let filter = Filter::new().eq("is_planned", false).eq("quantity", 0);
    let f = compile_filter(&filter, 1);
    assert_eq!(f.text, "WHERE is_planned = $1 AND quantity = $2");
    assert_eq!(f.values, vec![Value::Bool(false), Value::Int(0)]);
}

#[test]
fn empty_update_is_an_error() {
    assert_eq!(
        compile_update_set(&Changes::new(), 1),
        Err(QueryError::NoFieldsToUpdate)
    );
}

#[test]
fn explicit_null_update_is_kept() {
    let changes = Changes::new().set("note", Value::Null);
    let f = compile_update_set(&changes, 1).unwrap();
    assert_eq!(f.text, "note = $1");
    assert_eq!(f.values, vec![Value::Null]);
    assert_eq!(f.next_index, 2);
}

#[test]
fn pagination_cases() {
    assert_eq!(compile_pagination(Some(10), Some(20)), "LIMIT 10 OFFSET 20");
    assert_eq!(compile_pagination(None, None), "");
    assert_eq!(compile_pagination(Some(0), Some(5)), "OFFSET 5");
}

#[test]
fn key_predicate_continues_after_update_set() {
    let changes = Changes::new().set("a", 1).set("b", 2);
    let set = compile_update_set(&changes, 1).unwrap();
    assert_eq!(set.next_index, 3);

    let key = compile_key_predicate([("k1", "v1"), ("k2", "v2")], set.next_index);
    assert_eq!(key.text, "k1 = $3 AND k2 = $4");
    assert_eq!(key.next_index, 5);

    let mut stmt = Statement::new("UPDATE t SET");
    stmt.push_fragment(set)
        .unwrap()
        .push("WHERE")
        .push_fragment(key)
        .unwrap();
    assert_eq!(stmt.sql(), "UPDATE t SET a = $1, b = $2 WHERE k1 = $3 AND k2 = $4");
    assert_eq!(
        stmt.values(),
        &[
            Value::Int(1),
            Value::Int(2),
            Value::Text("v1".into()),
            Value::Text("v2".into()),
        ]
    );
}

#[test]
fn compilers_are_deterministic() {
    let filter = Filter::new()
        .eq("asset_id", 1)
        .range("start_ts", Range::between(10_i64, 20_i64));
    let changes = Changes::new().set("kpi_value", 0.87).set("end_ts", Value::Null);

    assert_eq!(compile_filter(&filter, 1), compile_filter(&filter, 1));
    assert_eq!(
        compile_update_set(&changes, 4),
        compile_update_set(&changes, 4)
    );
    assert_eq!(
        compile_key_predicate([("kpi_log_id", 9)], 2),
        compile_key_predicate([("kpi_log_id", 9)], 2)
    );
    assert_eq!(
        compile_pagination(Some(5), Some(5)),
        compile_pagination(Some(5), Some(5))
    );
}

#[test]
fn values_are_never_interpolated() {
    let hostile = "'; DROP TABLE state_log; --";
    let filter = Filter::new().eq("state_name", hostile);
    let f = compile_filter(&filter, 1);
    assert_eq!(f.text, "WHERE state_name = $1");
    assert!(!f.text.contains("DROP"));
    assert_eq!(f.values, vec![Value::Text(hostile.to_string())]);
}

#[test]
fn compiler_outputs_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Filter>();
    assert_send_sync::<Changes>();
    assert_send_sync::<Statement>();
    assert_send_sync::<crate::Fragment>();
}
