//! Error types for identifier parsing and the codec bridges.

use thiserror::Error;

use crate::identifier::IdentifierKind;

/// Errors that can occur while parsing, decoding, or reading an identifier.
#[derive(Debug, Error)]
pub enum CaipError {
    /// The input did not split into the expected number of segments.
    #[error("malformed {kind}: expected {expected} segments, got {found} in {input:?}")]
    Format {
        kind: IdentifierKind,
        input: String,
        expected: usize,
        found: usize,
    },

    /// A component failed its grammar after splitting.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The storage driver could not coerce the column value to a string.
    #[error("storage read error: {0}")]
    StorageRead(#[from] rusqlite::types::FromSqlError),

    /// The row itself could not be accessed (bad column index or name).
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// The API-scalar bridge was handed something other than a string.
    #[error("unsupported input kind for identifier scalar: {0}")]
    UnsupportedInputKind(&'static str),

    #[error("encoding error: {0}")]
    Encoding(String),

    #[error("decoding error: {0}")]
    Decoding(String),
}

/// Per-field grammar violations. Each variant carries the offending value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("chain namespace {0:?} does not match [-a-z0-9]{{3,8}}")]
    InvalidNamespace(String),

    #[error("chain reference {0:?} does not match [-a-zA-Z0-9]{{1,32}}")]
    InvalidReference(String),

    #[error("account address {0:?} does not match [a-zA-Z0-9]{{1,64}}")]
    InvalidAddress(String),

    #[error("asset namespace {0:?} does not match [-a-z0-9]{{3,8}}")]
    InvalidAssetNamespace(String),

    #[error("asset reference {0:?} does not match [-a-zA-Z0-9]{{1,64}}(/[-.%a-zA-Z0-9]{{1,78}})?")]
    InvalidAssetReference(String),

    #[error("transaction hash {0:?} does not match [a-zA-Z0-9]{{1,128}}")]
    InvalidHash(String),
}

impl ValidationError {
    /// Name of the component that failed.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::InvalidNamespace(_) => "namespace",
            ValidationError::InvalidReference(_) => "reference",
            ValidationError::InvalidAddress(_) => "address",
            ValidationError::InvalidAssetNamespace(_) => "asset_namespace",
            ValidationError::InvalidAssetReference(_) => "asset_reference",
            ValidationError::InvalidHash(_) => "hash",
        }
    }

    /// The value that was rejected.
    pub fn value(&self) -> &str {
        match self {
            ValidationError::InvalidNamespace(v)
            | ValidationError::InvalidReference(v)
            | ValidationError::InvalidAddress(v)
            | ValidationError::InvalidAssetNamespace(v)
            | ValidationError::InvalidAssetReference(v)
            | ValidationError::InvalidHash(v) => v,
        }
    }
}

/// Result type for identifier operations.
pub type Result<T> = std::result::Result<T, CaipError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_reference_message_names_token_suffix() {
        let err = ValidationError::InvalidAssetReference("x/".into());
        assert_eq!(
            err.to_string(),
            r#"asset reference "x/" does not match [-a-zA-Z0-9]{1,64}(/[-.%a-zA-Z0-9]{1,78})?"#
        );
        assert_eq!(err.field(), "asset_reference");
        assert_eq!(err.value(), "x/");
    }
}
