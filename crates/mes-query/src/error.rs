//! Error types for statement compilation

use thiserror::Error;

/// Result type alias for compiler operations
pub type QueryResult<T> = Result<T, QueryError>;

/// Errors raised while compiling or assembling a statement.
///
/// The filter, pagination and key compilers never fail. Only the update-set
/// compiler (empty mapping) and statement assembly can.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The update mapping produced zero `SET` assignments.
    #[error("No fields to update")]
    NoFieldsToUpdate,

    /// A fragment was compiled from a different start index than the
    /// statement it is appended to.
    #[error("Placeholder gap: statement continues at ${expected}, fragment starts at ${found}")]
    PlaceholderGap { expected: usize, found: usize },

    /// An identifier that is interpolated into SQL text failed validation.
    #[error("Invalid identifier: {0}")]
    InvalidIdent(String),
}

impl QueryError {
    pub(crate) fn invalid_ident(message: impl Into<String>) -> Self {
        Self::InvalidIdent(message.into())
    }

    /// Check if this is the empty update-set error
    pub fn is_no_fields_to_update(&self) -> bool {
        matches!(self, Self::NoFieldsToUpdate)
    }
}
