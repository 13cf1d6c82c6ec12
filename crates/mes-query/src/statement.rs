//! Left-to-right statement assembly.
//!
//! Compiled fragments carry absolute placeholder numbers, so they must be
//! compiled starting at [`Statement::next_index`] and appended in that order.
//! [`Statement::push_fragment`] checks this and refuses a fragment that would
//! reuse or skip placeholder numbers.
//!
//! # Example
//!
//! ```ignore
//! use mes_query::{Statement, compile_key_predicate, compile_update_set};
//!
//! let set = compile_update_set(&changes, 1)?;
//! let key = compile_key_predicate([("asset_id", asset_id), ("product_id", product_id)], set.next_index);
//!
//! let mut stmt = Statement::new("UPDATE performance_target SET");
//! stmt.push_fragment(set)?.push("WHERE").push_fragment(key)?.push("RETURNING *");
//! ```

use crate::bind::Fragment;
use crate::error::{QueryError, QueryResult};
use crate::value::Value;
use tokio_postgres::types::ToSql;

/// Full statement text plus its ordered bound values.
#[must_use]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Statement {
    sql: String,
    values: Vec<Value>,
}

impl Statement {
    /// Start a statement with an initial (placeholder-free) text.
    pub fn new(initial_sql: impl Into<String>) -> Self {
        let mut stmt = Self::default();
        stmt.push(&initial_sql.into());
        stmt
    }

    /// Append raw SQL, separated from the previous text by one space.
    ///
    /// Empty text is ignored so that optional clauses never leave double
    /// spaces behind.
    pub fn push(&mut self, sql: &str) -> &mut Self {
        let sql = sql.trim();
        if sql.is_empty() {
            return self;
        }
        if !self.sql.is_empty() {
            self.sql.push(' ');
        }
        self.sql.push_str(sql);
        self
    }

    /// The placeholder index the next appended fragment must start at.
    pub fn next_index(&self) -> usize {
        self.values.len() + 1
    }

    /// Append a compiled fragment and take ownership of its values.
    ///
    /// A fragment with no values is appended unconditionally (an empty one is
    /// a no-op). Otherwise it must start at [`Statement::next_index`].
    pub fn push_fragment(&mut self, fragment: Fragment) -> QueryResult<&mut Self> {
        let start = fragment.start_index();
        if !fragment.values.is_empty() && start != Some(self.next_index()) {
            return Err(QueryError::PlaceholderGap {
                expected: self.next_index(),
                found: start.unwrap_or(0),
            });
        }
        self.push(&fragment.text);
        self.values.extend(fragment.values);
        Ok(self)
    }

    /// Append `keyword` followed by the fragment, or nothing if the fragment
    /// is empty. Useful for `AND <conditions>` tails.
    pub fn push_fragment_after(&mut self, keyword: &str, fragment: Fragment) -> QueryResult<&mut Self> {
        if fragment.is_empty() {
            return Ok(self);
        }
        self.push(keyword);
        self.push_fragment(fragment)
    }

    /// Rendered SQL text.
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Bound values in placeholder order.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Parameter refs compatible with `tokio-postgres`.
    pub fn params_ref(&self) -> Vec<&(dyn ToSql + Sync)> {
        self.values.iter().map(|v| v as &(dyn ToSql + Sync)).collect()
    }

    /// Split into text and values.
    pub fn into_parts(self) -> (String, Vec<Value>) {
        (self.sql, self.values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Filter, Page, compile_filter};

    #[test]
    fn optional_clauses_leave_no_double_spaces() {
        let mut stmt = Statement::new("SELECT * FROM general_note");
        stmt.push_fragment(compile_filter(&Filter::new(), 1))
            .unwrap()
            .push("ORDER BY created_at DESC")
            .push(&Page::all().to_sql());
        assert_eq!(stmt.sql(), "SELECT * FROM general_note ORDER BY created_at DESC");
        assert!(stmt.values().is_empty());
    }

    #[test]
    fn rejects_fragment_compiled_from_wrong_index() {
        let mut stmt = Statement::new("SELECT * FROM kpi_log");
        stmt.push_fragment(compile_filter(&Filter::new().eq("kpi_id", 1), 1))
            .unwrap();

        let err = stmt
            .push_fragment(compile_filter(&Filter::new().eq("asset_id", 2), 1))
            .unwrap_err();
        assert_eq!(
            err,
            QueryError::PlaceholderGap {
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn rejects_fragment_with_underflowing_index() {
        let mut stmt = Statement::new("SELECT * FROM count_log WHERE");
        let bogus = Fragment {
            text: "asset_id = $1 AND count_type_id = $2".into(),
            values: vec![Value::Int(1), Value::Int(2)],
            next_index: 1,
        };
        assert_eq!(
            stmt.push_fragment(bogus).unwrap_err(),
            QueryError::PlaceholderGap {
                expected: 1,
                found: 0
            }
        );
        assert!(stmt.values().is_empty());
    }

    #[test]
    fn keyword_only_when_fragment_present() {
        let mut stmt = Statement::new("SELECT * FROM asset_type WHERE asset_type_id = $1");
        stmt.values.push(Value::Int(1));

        stmt.push_fragment_after("AND", crate::compile_conditions(&Filter::new(), 2))
            .unwrap();
        assert_eq!(stmt.sql(), "SELECT * FROM asset_type WHERE asset_type_id = $1");

        let visible = Filter::new().eq("removed", false);
        stmt.push_fragment_after("AND", crate::compile_conditions(&visible, 2))
            .unwrap();
        assert_eq!(
            stmt.sql(),
            "SELECT * FROM asset_type WHERE asset_type_id = $1 AND removed = $2"
        );
        assert_eq!(stmt.params_ref().len(), 2);
    }
}
