use super::*;
use crate::input::{
    AssetTypePatch, NewStateLog, PerformanceTargetPatch, ProductDefinitionFilter, StateLogFilter,
};
use crate::model::{AssetType, DowntimeReason, PerformanceTarget, ProductDefinition, StateLog};
use mes_query::{QueryError, Value};

#[test]
fn list_appends_visibility_order_and_page() {
    let filter: Filter = ProductDefinitionFilter {
        product_family_id: Some(2),
    }
    .into();
    let stmt = list_statement(&ProductDefinition::TABLE, filter, Page::new(10, 20)).unwrap();
    assert_eq!(
        stmt.sql(),
        "SELECT * FROM product_definition WHERE product_family_id = $1 AND removed = $2 \
         ORDER BY product_name LIMIT 10 OFFSET 20"
    );
    assert_eq!(stmt.values(), &[Value::Int(2), Value::Bool(false)]);
}

#[test]
fn list_without_criteria_still_hides_removed() {
    let stmt = list_statement(&DowntimeReason::TABLE, Filter::new(), Page::all()).unwrap();
    assert_eq!(
        stmt.sql(),
        "SELECT * FROM downtime_reason WHERE removed = $1 ORDER BY downtime_reason_code"
    );
}

#[test]
fn unordered_table_has_no_order_by() {
    let stmt = list_statement(&PerformanceTarget::TABLE, Filter::new(), Page::all()).unwrap();
    assert_eq!(
        stmt.sql(),
        "SELECT * FROM performance_target WHERE removed = $1"
    );
}

#[test]
fn log_list_is_newest_first() {
    let filter: Filter = StateLogFilter {
        asset_id: Some(3),
        ..Default::default()
    }
    .into();
    let stmt = list_statement(&StateLog::TABLE, filter, Page::new(50, 0)).unwrap();
    assert_eq!(
        stmt.sql(),
        "SELECT * FROM state_log WHERE asset_id = $1 AND removed = $2 ORDER BY logged_at DESC LIMIT 50"
    );
}

#[test]
fn get_by_single_key() {
    let stmt = get_statement(&AssetType::TABLE, &7).unwrap();
    assert_eq!(
        stmt.sql(),
        "SELECT * FROM asset_type WHERE asset_type_id = $1 AND removed = $2"
    );
    assert_eq!(stmt.values(), &[Value::Int(7), Value::Bool(false)]);
}

#[test]
fn get_by_composite_key() {
    let stmt = get_statement(&PerformanceTarget::TABLE, &(3, 8)).unwrap();
    assert_eq!(
        stmt.sql(),
        "SELECT * FROM performance_target WHERE asset_id = $1 AND product_id = $2 AND removed = $3"
    );
}

#[test]
fn insert_returns_row() {
    let input = NewStateLog {
        asset_id: 3,
        state_id: 11,
        downtime_reason_id: None,
        additional_info: None,
    };
    let stmt = insert_statement(&StateLog::TABLE, &input.into_changes()).unwrap();
    assert_eq!(
        stmt.sql(),
        "INSERT INTO state_log (asset_id, state_id, downtime_reason_id, additional_info) \
         VALUES ($1, $2, $3, $4) RETURNING *"
    );
    assert_eq!(
        stmt.values(),
        &[Value::Int(3), Value::Int(11), Value::Null, Value::Null]
    );
}

#[test]
fn update_numbers_key_after_assignments() {
    let patch = PerformanceTargetPatch {
        target_value: Some(42.5),
        target_unit: Some(Some("pcs/h".into())),
    };
    let stmt = update_statement(&PerformanceTarget::TABLE, &(3, 8), &patch.into_changes()).unwrap();
    assert_eq!(
        stmt.sql(),
        "UPDATE performance_target SET target_value = $1, target_unit = $2 \
         WHERE asset_id = $3 AND product_id = $4 AND removed = $5 RETURNING *"
    );
    assert_eq!(
        stmt.values(),
        &[
            Value::Float(42.5),
            Value::Text("pcs/h".into()),
            Value::Int(3),
            Value::Int(8),
            Value::Bool(false),
        ]
    );
}

#[test]
fn empty_patch_is_rejected_before_execution() {
    let err = update_statement(
        &AssetType::TABLE,
        &1,
        &AssetTypePatch::default().into_changes(),
    )
    .unwrap_err();
    assert!(err.is_no_fields_to_update());
    assert!(matches!(err, DataError::Query(QueryError::NoFieldsToUpdate)));
}

#[test]
fn soft_delete_only_touches_visible_rows() {
    let stmt = soft_delete_statement(&AssetType::TABLE, &7).unwrap();
    assert_eq!(
        stmt.sql(),
        "UPDATE asset_type SET removed = $1 WHERE asset_type_id = $2 AND removed = $3 RETURNING *"
    );
    assert_eq!(
        stmt.values(),
        &[Value::Bool(true), Value::Int(7), Value::Bool(false)]
    );
}

#[test]
fn placeholder_count_matches_values() {
    let stmt = update_statement(
        &AssetType::TABLE,
        &1,
        &Changes::new().set("asset_type_name", "Line").set("asset_type_description", Value::Null),
    )
    .unwrap();
    let placeholders = stmt.sql().matches('$').count();
    assert_eq!(placeholders, stmt.values().len());
}

fn assert_send<T: Send>(_: &T) {}

#[test]
fn executor_futures_are_send() {
    // Only needs to type-check; the futures are never polled.
    fn check(client: &tokio_postgres::Client) {
        assert_send(&list::<AssetType>(client, Filter::new(), Page::all()));
        assert_send(&get::<PerformanceTarget>(client, &(3, 8)));
        assert_send(&create(
            client,
            NewStateLog {
                asset_id: 3,
                state_id: 11,
                downtime_reason_id: None,
                additional_info: None,
            },
        ));
        assert_send(&update(client, &7, AssetTypePatch::default()));
        assert_send(&soft_delete::<AssetType>(client, &7));
    }
    let _ = check;
}
