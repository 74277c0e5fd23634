//! Relational-column bridge.
//!
//! Identifiers are stored in a single nullable TEXT column holding the
//! canonical form. Every identifier implements [`rusqlite::types::ToSql`]
//! and [`rusqlite::types::FromSql`], so `Option<T>` works for nullable
//! columns through the driver's own NULL handling. [`scan_into`] and
//! [`read_column`] expose the same rules with this crate's error type.
//!
//! The connection is owned by the caller; nothing here opens, pools, or
//! retries.

use rusqlite::types::{FromSqlError, FromSqlResult, ToSqlOutput, ValueRef};
use rusqlite::{Row, RowIndex};

use crate::error::{CaipError, Result};
use crate::identifier::CaipIdentifier;

pub(crate) fn to_column<T: CaipIdentifier>(id: &T) -> ToSqlOutput<'static> {
    ToSqlOutput::from(id.to_string())
}

pub(crate) fn from_column<T: CaipIdentifier>(value: ValueRef<'_>) -> FromSqlResult<T> {
    column_text(value)?
        .parse()
        .map_err(|e: CaipError| FromSqlError::Other(Box::new(e)))
}

/// Coerce a non-NULL column value to a string. TEXT and UTF-8 BLOB values
/// are accepted.
fn column_text(value: ValueRef<'_>) -> FromSqlResult<&str> {
    match value {
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => {
            std::str::from_utf8(bytes).map_err(|e| FromSqlError::Other(Box::new(e)))
        }
        ValueRef::Null | ValueRef::Integer(_) | ValueRef::Real(_) => Err(FromSqlError::InvalidType),
    }
}

/// Decode a column value. NULL is `None`.
pub fn decode_value<T: CaipIdentifier>(value: ValueRef<'_>) -> Result<Option<T>> {
    if let ValueRef::Null = value {
        return Ok(None);
    }
    let text = column_text(value).map_err(|e| {
        tracing::debug!(kind = %T::KIND, column_type = %value.data_type(), "column is not text");
        CaipError::StorageRead(e)
    })?;
    Ok(Some(text.parse()?))
}

/// Scan a column value into an existing field. NULL leaves the target
/// unchanged; on error the target is not modified.
pub fn scan_into<T: CaipIdentifier>(target: &mut T, value: ValueRef<'_>) -> Result<()> {
    match decode_value(value)? {
        Some(id) => *target = id,
        None => tracing::trace!(kind = %T::KIND, "null column, leaving identifier unset"),
    }
    Ok(())
}

/// Read a nullable identifier column from a result row.
pub fn read_column<T: CaipIdentifier, I: RowIndex>(row: &Row<'_>, idx: I) -> Result<Option<T>> {
    let value = row.get_ref(idx)?;
    decode_value(value)
}
