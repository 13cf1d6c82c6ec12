//! # mes-query
//!
//! Parameterized statement compilers for the MES data layer.
//!
//! Every compiler is a pure function from a request-shaped mapping to a
//! [`Fragment`]: SQL text with `$N` placeholders, the values those placeholders
//! refer to, and the next free placeholder index. Fragments compose left to
//! right into a [`Statement`], which is handed to an executor as
//! `(text, values)`. Values are never interpolated into text.
//!
//! - [`compile_filter`]: criterion mapping -> `WHERE a = $1 AND b >= $2`
//! - [`compile_update_set`]: update mapping -> `a = $1, b = $2`
//! - [`compile_pagination`]: limit/offset -> `LIMIT 10 OFFSET 20`
//! - [`compile_key_predicate`]: composite key -> `a = $3 AND b = $4`
//!
//! ```ignore
//! use mes_query::{Changes, Statement, compile_key_predicate, compile_update_set};
//!
//! let changes = Changes::new().set("target_value", 42.5).set("target_unit", "pcs/h");
//! let set = compile_update_set(&changes, 1)?;
//! let key = compile_key_predicate([("asset_id", 3), ("product_id", 8)], set.next_index);
//!
//! let mut stmt = Statement::new("UPDATE performance_target SET");
//! stmt.push_fragment(set)?.push("WHERE").push_fragment(key)?.push("RETURNING *");
//! // UPDATE performance_target SET target_value = $1, target_unit = $2
//! //   WHERE asset_id = $3 AND product_id = $4 RETURNING *
//! ```

pub mod bind;
pub mod error;
pub mod filter;
pub mod ident;
pub mod key;
pub mod page;
pub mod statement;
pub mod update;
pub mod value;

pub use bind::{Binder, Fragment};
pub use error::{QueryError, QueryResult};
pub use filter::{Criterion, Filter, Range, compile_conditions, compile_filter};
pub use ident::Ident;
pub use key::compile_key_predicate;
pub use page::{Page, compile_pagination};
pub use statement::Statement;
pub use update::{Changes, compile_insert_values, compile_update_set};
pub use value::Value;

#[cfg(test)]
mod tests;
