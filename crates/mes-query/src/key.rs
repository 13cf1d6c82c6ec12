//! Key predicates for single and composite primary keys.

use crate::bind::{Binder, Fragment};
use crate::value::Value;

/// Compile ordered `(column, value)` pairs into `a = $N AND b = $N+1`.
///
/// Numbering continues from `start_index`, typically the `next_index` of the
/// `SET` fragment the predicate follows. Column order is preserved as given.
/// The text carries no `WHERE` keyword. No pairs yields an empty fragment.
pub fn compile_key_predicate<I, K, V>(pairs: I, start_index: usize) -> Fragment
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<Value>,
{
    let mut binder = Binder::starting_at(start_index);
    let conjuncts: Vec<String> = pairs
        .into_iter()
        .map(|(column, value)| {
            let idx = binder.bind(value);
            format!("{} = ${idx}", column.as_ref())
        })
        .collect();

    binder.finish(conjuncts.join(" AND "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_key() {
        let f = compile_key_predicate([("asset_type_id", 9)], 1);
        assert_eq!(f.text, "asset_type_id = $1");
        assert_eq!(f.values, vec![Value::Int(9)]);
    }

    #[test]
    fn composite_key_keeps_caller_order() {
        let f = compile_key_predicate([("product_id", 2), ("asset_id", 1)], 5);
        assert_eq!(f.text, "product_id = $5 AND asset_id = $6");
        assert_eq!(f.values, vec![Value::Int(2), Value::Int(1)]);
        assert_eq!(f.next_index, 7);
    }

    #[test]
    fn no_pairs() {
        let f = compile_key_predicate(Vec::<(&str, Value)>::new(), 4);
        assert!(f.is_empty());
        assert_eq!(f.next_index, 4);
    }
}
