//! Table descriptors and the traits that tie row types to them.

use crate::row::FromRow;
use mes_query::{Filter, Value};

/// Soft-delete flag present on every table.
pub const SOFT_DELETE_COLUMN: &str = "removed";

/// Static description of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Table {
    pub name: &'static str,
    /// Primary key columns, in predicate order.
    pub key: &'static [&'static str],
    /// Default `ORDER BY` for list queries.
    pub order_by: Option<&'static str>,
    /// Human-readable entity name used in error messages.
    pub label: &'static str,
}

impl Table {
    /// `"<label> not found"`, returned when an update matches no visible row.
    pub fn not_found_message(&self) -> String {
        format!("{} not found", self.label)
    }

    /// `"<label> not found or already deleted"`, returned when a delete matches no visible row.
    pub fn not_deleted_message(&self) -> String {
        format!("{} not found or already deleted", self.label)
    }
}

/// Restrict `filter` to rows that are not soft-deleted.
///
/// The criterion is appended after the caller's own fields, so it binds last.
pub fn visible(filter: Filter) -> Filter {
    filter.eq(SOFT_DELETE_COLUMN, false)
}

/// Primary key values, in the same order as [`Table::key`].
pub trait KeyValues: Send + Sync {
    fn key_values(&self) -> Vec<Value>;
}

impl KeyValues for i32 {
    fn key_values(&self) -> Vec<Value> {
        vec![Value::Int(*self)]
    }
}

impl KeyValues for (i32, i32) {
    fn key_values(&self) -> Vec<Value> {
        vec![Value::Int(self.0), Value::Int(self.1)]
    }
}

/// A row type stored in one table.
pub trait Entity: FromRow + Send {
    const TABLE: Table;
    type Key: KeyValues;
}

/// Entities that may be updated and soft-deleted after creation.
///
/// Log tables are append-only and do not implement this.
pub trait Mutable: Entity {}

/// Pair each key column of `table` with its value.
pub(crate) fn key_pairs<K: KeyValues + ?Sized>(table: &Table, key: &K) -> Vec<(&'static str, Value)> {
    let values = key.key_values();
    debug_assert_eq!(
        values.len(),
        table.key.len(),
        "key arity mismatch for {}",
        table.name
    );
    table.key.iter().copied().zip(values).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mes_query::compile_filter;

    const TARGETS: Table = Table {
        name: "performance_target",
        key: &["asset_id", "product_id"],
        order_by: None,
        label: "Performance target",
    };

    #[test]
    fn messages_use_label() {
        assert_eq!(TARGETS.not_found_message(), "Performance target not found");
        assert_eq!(
            TARGETS.not_deleted_message(),
            "Performance target not found or already deleted"
        );
    }

    #[test]
    fn visible_binds_after_caller_fields() {
        let f = compile_filter(&visible(Filter::new().eq("asset_id", 7)), 1);
        assert_eq!(f.text, "WHERE asset_id = $1 AND removed = $2");
        assert_eq!(f.values, vec![Value::Int(7), Value::Bool(false)]);
    }

    #[test]
    fn composite_key_pairs_in_column_order() {
        let pairs = key_pairs(&TARGETS, &(3, 8));
        assert_eq!(
            pairs,
            vec![("asset_id", Value::Int(3)), ("product_id", Value::Int(8))]
        );
    }
}
