//! Positional placeholder allocation.

use crate::value::Value;
use tokio_postgres::types::ToSql;

/// Allocates sequential `$N` placeholders and collects the bound values.
///
/// Placeholders are 1-based. A binder can start at any index so that a
/// fragment compiled after another one continues where the previous stopped.
#[derive(Debug, Clone)]
pub struct Binder {
    next: usize,
    values: Vec<Value>,
}

impl Default for Binder {
    fn default() -> Self {
        Self::new()
    }
}

impl Binder {
    /// Create a binder whose first placeholder is `$1`.
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Create a binder whose first placeholder is `$start`.
    pub fn starting_at(start: usize) -> Self {
        Self {
            next: start,
            values: Vec::new(),
        }
    }

    /// Bind a value and return the placeholder index it occupies.
    pub fn bind(&mut self, value: impl Into<Value>) -> usize {
        let idx = self.next;
        self.values.push(value.into());
        self.next += 1;
        idx
    }

    /// The index the next bound value will receive.
    pub fn next_index(&self) -> usize {
        self.next
    }

    /// Values bound so far, in placeholder order.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Close the binder into a fragment with the given text.
    pub fn finish(self, text: impl Into<String>) -> Fragment {
        Fragment {
            text: text.into(),
            values: self.values,
            next_index: self.next,
        }
    }
}

/// Statement text plus the values its placeholders refer to.
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    /// SQL text using `$N` placeholders. Empty when nothing was emitted.
    pub text: String,
    /// Bound values, index-aligned with the placeholders in `text`.
    pub values: Vec<Value>,
    /// First placeholder index not used by this fragment.
    pub next_index: usize,
}

impl Fragment {
    /// An empty fragment that consumes no placeholders.
    pub fn empty(start_index: usize) -> Self {
        Self {
            text: String::new(),
            values: Vec::new(),
            next_index: start_index,
        }
    }

    /// Whether no text was emitted.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Index of the first placeholder this fragment uses.
    ///
    /// `None` when `next_index` is too small for the number of values, which
    /// only a hand-built fragment can produce.
    pub fn start_index(&self) -> Option<usize> {
        self.next_index.checked_sub(self.values.len())
    }

    /// Parameter refs compatible with `tokio-postgres`.
    pub fn params_ref(&self) -> Vec<&(dyn ToSql + Sync)> {
        self.values.iter().map(|v| v as &(dyn ToSql + Sync)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binds_sequentially_from_start() {
        let mut b = Binder::starting_at(3);
        assert_eq!(b.bind(10), 3);
        assert_eq!(b.bind("x"), 4);
        assert_eq!(b.next_index(), 5);

        let f = b.finish("a = $3 AND b = $4");
        assert_eq!(f.values, vec![Value::Int(10), Value::Text("x".into())]);
        assert_eq!(f.start_index(), Some(3));
        assert_eq!(f.next_index, 5);
    }

    #[test]
    fn unused_binder_keeps_start() {
        let f = Binder::starting_at(7).finish("");
        assert!(f.is_empty());
        assert_eq!(f.next_index, 7);
        assert_eq!(f, Fragment::empty(7));
    }

    #[test]
    fn inconsistent_fragment_has_no_start() {
        let f = Fragment {
            text: "a = $1 AND b = $2".into(),
            values: vec![Value::Int(1), Value::Int(2)],
            next_index: 1,
        };
        assert_eq!(f.start_index(), None);
    }
}
