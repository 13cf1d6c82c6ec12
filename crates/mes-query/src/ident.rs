//! Identifier validation for names that are interpolated into SQL text.
//!
//! Values always travel as bound parameters. Schema and table names cannot,
//! so anything that reaches SQL text from configuration goes through
//! [`Ident::parse`] first. Each dot-separated part must match
//! `[A-Za-z_][A-Za-z0-9_$]*`.
//!
//! The filter/update/key compilers do not use this: their field names are the
//! caller's responsibility.

use crate::error::{QueryError, QueryResult};
use std::fmt;

/// A validated, possibly schema-qualified, SQL identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ident(String);

impl Ident {
    /// Validate `s` as an unquoted, optionally dotted identifier.
    pub fn parse(s: &str) -> QueryResult<Self> {
        if s.is_empty() {
            return Err(QueryError::invalid_ident("identifier cannot be empty"));
        }
        for part in s.split('.') {
            validate_part(part)?;
        }
        Ok(Self(s.to_string()))
    }

    /// The identifier as written.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn validate_part(part: &str) -> QueryResult<()> {
    let mut chars = part.chars();
    match chars.next() {
        None => return Err(QueryError::invalid_ident("empty identifier segment")),
        Some(c) if c == '_' || c.is_ascii_alphabetic() => {}
        Some(c) => {
            return Err(QueryError::invalid_ident(format!(
                "invalid identifier start character '{c}' in '{part}'"
            )));
        }
    }
    if let Some(c) = chars.find(|c| !(*c == '_' || *c == '$' || c.is_ascii_alphanumeric())) {
        return Err(QueryError::invalid_ident(format!(
            "invalid character '{c}' in '{part}'"
        )));
    }
    Ok(())
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Ident {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
