//! Error types for the data layer

use mes_query::QueryError;
use std::time::Duration;
use thiserror::Error;

/// Result type alias for data layer operations
pub type DataResult<T> = Result<T, DataError>;

/// Errors surfaced to the API layer.
#[derive(Debug, Error)]
pub enum DataError {
    /// Statement compilation error (e.g. an empty update)
    #[error(transparent)]
    Query(#[from] QueryError),

    /// Database connection error
    #[error("Connection error: {0}")]
    Connection(String),

    /// Statement execution error
    #[error("Database error: {0}")]
    Database(#[from] tokio_postgres::Error),

    /// No visible row matched the key
    #[error("{0}")]
    NotFound(String),

    /// Unique constraint violation
    #[error("Unique constraint violation: {0}")]
    UniqueViolation(String),

    /// Foreign key constraint violation
    #[error("Foreign key violation: {0}")]
    ForeignKeyViolation(String),

    /// Check constraint violation
    #[error("Check constraint violation: {0}")]
    CheckViolation(String),

    /// Row decode/mapping error
    #[error("Decode error on column '{column}': {message}")]
    Decode { column: String, message: String },

    /// Caller input rejected before compilation
    #[error("Validation error: {0}")]
    Validation(String),

    /// Pool error
    #[error("Pool error: {0}")]
    Pool(String),

    /// Statement exceeded the configured timeout
    #[error("Query timeout after {0:?}")]
    Timeout(Duration),

    /// Invalid or unreadable configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl DataError {
    /// Create a decode error for a specific column
    pub fn decode(column: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            column: column.into(),
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Check if this is a not found error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Check if an update was rejected for having nothing to set
    pub fn is_no_fields_to_update(&self) -> bool {
        matches!(self, Self::Query(e) if e.is_no_fields_to_update())
    }

    /// Check if this is a unique violation error
    pub fn is_unique_violation(&self) -> bool {
        matches!(self, Self::UniqueViolation(_))
    }

    /// Classify a `tokio_postgres` error by SQLSTATE.
    pub fn from_db_error(err: tokio_postgres::Error) -> Self {
        if let Some(db_err) = err.as_db_error() {
            let constraint = db_err.constraint().unwrap_or("unknown");
            let message = db_err.message();

            match db_err.code().code() {
                "23505" => return Self::UniqueViolation(format!("{constraint}: {message}")),
                "23503" => return Self::ForeignKeyViolation(format!("{constraint}: {message}")),
                "23514" => return Self::CheckViolation(format!("{constraint}: {message}")),
                _ => {}
            }
        }
        Self::Database(err)
    }
}

impl From<deadpool_postgres::PoolError> for DataError {
    fn from(err: deadpool_postgres::PoolError) -> Self {
        Self::Pool(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_fields_to_update_passes_through() {
        let err = DataError::from(QueryError::NoFieldsToUpdate);
        assert!(err.is_no_fields_to_update());
        assert_eq!(err.to_string(), "No fields to update");
    }

    #[test]
    fn not_found_message_is_verbatim() {
        let err = DataError::not_found("Asset type not found");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Asset type not found");
    }
}
