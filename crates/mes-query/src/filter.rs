//! Criterion mappings and the WHERE compiler.
//!
//! A [`Filter`] is an ordered list of `(field, criterion)` pairs. Compiling it
//! yields a conjunction of `field = $N`, `field >= $N` and `field <= $N`
//! predicates. Absent criteria (and `NULL` equality values) contribute nothing:
//! they are never rendered as `IS NULL`.
//!
//! # Example
//!
//! ```ignore
//! use mes_query::{Filter, Range, compile_filter};
//!
//! let filter = Filter::new()
//!     .eq_opt("asset_id", args.asset_id)
//!     .range("logged_at", Range::since(shift_start))
//!     .eq("removed", false);
//!
//! let where_clause = compile_filter(&filter, 1);
//! ```

use crate::bind::{Binder, Fragment};
use crate::value::Value;

/// An inclusive range criterion. Either bound may be missing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Range {
    pub from: Option<Value>,
    pub to: Option<Value>,
}

impl Range {
    /// `field >= from AND field <= to`
    pub fn between(from: impl Into<Value>, to: impl Into<Value>) -> Self {
        Self {
            from: Some(from.into()),
            to: Some(to.into()),
        }
    }

    /// `field >= from`
    pub fn since(from: impl Into<Value>) -> Self {
        Self {
            from: Some(from.into()),
            to: None,
        }
    }

    /// `field <= to`
    pub fn until(to: impl Into<Value>) -> Self {
        Self {
            from: None,
            to: Some(to.into()),
        }
    }

    /// Build from optional bounds, e.g. a `{from?, to?}` request object.
    pub fn bounds<F, T>(from: Option<F>, to: Option<T>) -> Self
    where
        F: Into<Value>,
        T: Into<Value>,
    {
        Self {
            from: from.map(Into::into),
            to: to.map(Into::into),
        }
    }

    fn lower(&self) -> Option<&Value> {
        self.from.as_ref().filter(|v| !v.is_null())
    }

    fn upper(&self) -> Option<&Value> {
        self.to.as_ref().filter(|v| !v.is_null())
    }
}

/// What a single field is matched against.
#[derive(Debug, Clone, PartialEq)]
pub enum Criterion {
    /// `field = value`
    Eq(Value),
    /// `field >= from` and/or `field <= to`
    Range(Range),
}

impl From<Range> for Criterion {
    fn from(r: Range) -> Self {
        Criterion::Range(r)
    }
}

/// An ordered criterion mapping.
///
/// Setting a field that is already present replaces its criterion in place, so
/// the field keeps its original position in the generated text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    entries: Vec<(String, Option<Criterion>)>,
}

impl Filter {
    /// Create an empty filter (matches all rows).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the criterion for `field`. `None` marks the field absent.
    pub fn insert(&mut self, field: impl Into<String>, criterion: Option<Criterion>) -> &mut Self {
        let field = field.into();
        match self.entries.iter_mut().find(|(f, _)| *f == field) {
            Some((_, slot)) => *slot = criterion,
            None => self.entries.push((field, criterion)),
        }
        self
    }

    /// Add `field = value`.
    pub fn eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(field, Some(Criterion::Eq(value.into())));
        self
    }

    /// Add `field = value` when `value` is `Some`; otherwise the field is absent.
    pub fn eq_opt<T: Into<Value>>(mut self, field: impl Into<String>, value: Option<T>) -> Self {
        self.insert(field, value.map(|v| Criterion::Eq(v.into())));
        self
    }

    /// Add a range criterion.
    pub fn range(mut self, field: impl Into<String>, range: Range) -> Self {
        self.insert(field, Some(Criterion::Range(range)));
        self
    }

    /// Add a range criterion when `range` is `Some`; otherwise the field is absent.
    pub fn range_opt(mut self, field: impl Into<String>, range: Option<Range>) -> Self {
        self.insert(field, range.map(Criterion::Range));
        self
    }

    /// Number of fields in the mapping, absent ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the mapping has no fields at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(field, criterion)` pairs in mapping order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&Criterion>)> {
        self.entries.iter().map(|(f, c)| (f.as_str(), c.as_ref()))
    }
}

impl<K: Into<String>> FromIterator<(K, Option<Criterion>)> for Filter {
    fn from_iter<I: IntoIterator<Item = (K, Option<Criterion>)>>(iter: I) -> Self {
        let mut filter = Filter::new();
        for (field, criterion) in iter {
            filter.insert(field, criterion);
        }
        filter
    }
}

/// Compile a filter into a bare conjunction (`a = $1 AND b >= $2`).
///
/// Returns an empty fragment when no field emits a predicate.
pub fn compile_conditions(filter: &Filter, start_index: usize) -> Fragment {
    let mut binder = Binder::starting_at(start_index);
    let mut conjuncts: Vec<String> = Vec::with_capacity(filter.len());

    for (field, criterion) in filter.iter() {
        match criterion {
            None | Some(Criterion::Eq(Value::Null)) => {}
            Some(Criterion::Eq(value)) => {
                let idx = binder.bind(value.clone());
                conjuncts.push(format!("{field} = ${idx}"));
            }
            Some(Criterion::Range(range)) => {
                if let Some(from) = range.lower() {
                    let idx = binder.bind(from.clone());
                    conjuncts.push(format!("{field} >= ${idx}"));
                }
                if let Some(to) = range.upper() {
                    let idx = binder.bind(to.clone());
                    conjuncts.push(format!("{field} <= ${idx}"));
                }
            }
        }
    }

    binder.finish(conjuncts.join(" AND "))
}

/// Compile a filter into a `WHERE ...` clause.
///
/// An empty result (no `WHERE` keyword at all) means "match all rows"; it is
/// not an error.
pub fn compile_filter(filter: &Filter, start_index: usize) -> Fragment {
    let mut fragment = compile_conditions(filter, start_index);
    if !fragment.is_empty() {
        fragment.text.insert_str(0, "WHERE ");
    }
    fragment
}
