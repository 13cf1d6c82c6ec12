//! Update mappings and the SET / VALUES compilers.
//!
//! [`Changes`] distinguishes "leave this column alone" (the field is not in the
//! mapping) from "clear this column" (the field maps to [`Value::Null`]).

use crate::bind::{Binder, Fragment};
use crate::error::{QueryError, QueryResult};
use crate::value::Value;

/// An ordered update mapping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Changes {
    entries: Vec<(String, Value)>,
}

impl Changes {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign `value` to `field`, replacing an earlier assignment in place.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        let field = field.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(f, _)| *f == field) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((field, value)),
        }
        self
    }

    /// Assign `value` to `field`. `Value::Null` is kept and clears the column.
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(field, value);
        self
    }

    /// Assign `value` when it is `Some`; `None` leaves the column untouched.
    pub fn set_opt<T: Into<Value>>(mut self, field: impl Into<String>, value: Option<T>) -> Self {
        if let Some(v) = value {
            self.insert(field, v);
        }
        self
    }

    /// Tri-state assignment for nullable columns:
    /// - `None`: leave untouched
    /// - `Some(None)`: set to `NULL`
    /// - `Some(Some(v))`: set to `v`
    pub fn set_nullable<T: Into<Value>>(
        mut self,
        field: impl Into<String>,
        value: Option<Option<T>>,
    ) -> Self {
        if let Some(v) = value {
            self.insert(field, Value::from(v));
        }
        self
    }

    /// Number of assignments.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no assignments.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(field, value)` pairs in mapping order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(f, v)| (f.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Changes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut changes = Changes::new();
        for (field, value) in iter {
            changes.insert(field, value);
        }
        changes
    }
}

/// Compile an update mapping into `a = $1, b = $2` (no `SET` keyword).
///
/// Fails with [`QueryError::NoFieldsToUpdate`] when the mapping is empty: an
/// `UPDATE` without assignments is invalid, and silently doing nothing would
/// hide a caller passing an empty input.
pub fn compile_update_set(changes: &Changes, start_index: usize) -> QueryResult<Fragment> {
    if changes.is_empty() {
        return Err(QueryError::NoFieldsToUpdate);
    }

    let mut binder = Binder::starting_at(start_index);
    let assignments: Vec<String> = changes
        .iter()
        .map(|(field, value)| {
            let idx = binder.bind(value.clone());
            format!("{field} = ${idx}")
        })
        .collect();

    Ok(binder.finish(assignments.join(", ")))
}

/// Compile a mapping into an INSERT column/values list:
/// `(a, b) VALUES ($1, $2)`.
///
/// An empty mapping compiles to `DEFAULT VALUES`.
pub fn compile_insert_values(changes: &Changes, start_index: usize) -> Fragment {
    if changes.is_empty() {
        return Binder::starting_at(start_index).finish("DEFAULT VALUES");
    }

    let mut binder = Binder::starting_at(start_index);
    let mut columns = Vec::with_capacity(changes.len());
    let mut placeholders = Vec::with_capacity(changes.len());
    for (field, value) in changes.iter() {
        columns.push(field);
        placeholders.push(format!("${}", binder.bind(value.clone())));
    }

    let text = format!(
        "({}) VALUES ({})",
        columns.join(", "),
        placeholders.join(", ")
    );
    binder.finish(text)
}
