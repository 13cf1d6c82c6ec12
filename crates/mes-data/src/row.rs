//! Row mapping traits and utilities

use crate::error::{DataError, DataResult};
use tokio_postgres::Row;

/// Trait for types that can be built from a database row.
pub trait FromRow: Sized {
    /// Convert a database row into Self
    fn from_row(row: &Row) -> DataResult<Self>;
}

/// Extension trait for Row to provide typed access
pub trait RowExt {
    /// Try to get a column value, returning [`DataError::Decode`] on failure
    fn try_get_column<T>(&self, column: &str) -> DataResult<T>
    where
        T: for<'a> tokio_postgres::types::FromSql<'a>;
}

impl RowExt for Row {
    fn try_get_column<T>(&self, column: &str) -> DataResult<T>
    where
        T: for<'a> tokio_postgres::types::FromSql<'a>,
    {
        self.try_get(column)
            .map_err(|e| DataError::decode(column, e.to_string()))
    }
}

/// Implement [`FromRow`] for a struct whose field names equal its column names.
///
/// ```ignore
/// impl_from_row!(AssetType { asset_type_id, asset_type_name, removed });
/// ```
#[macro_export]
macro_rules! impl_from_row {
    ($ty:ident { $($field:ident),+ $(,)? }) => {
        impl $crate::row::FromRow for $ty {
            fn from_row(row: &::tokio_postgres::Row) -> $crate::error::DataResult<Self> {
                use $crate::row::RowExt as _;
                Ok(Self {
                    $($field: row.try_get_column(stringify!($field))?,)+
                })
            }
        }
    };
}

/// Map every row, stopping at the first decode error.
pub fn map_rows<T: FromRow>(rows: &[Row]) -> DataResult<Vec<T>> {
    rows.iter().map(T::from_row).collect()
}
