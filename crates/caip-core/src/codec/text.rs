//! Canonical text bridge: the canonical form as raw bytes.

use crate::error::{CaipError, Result};
use crate::identifier::CaipIdentifier;

pub fn to_text<T: CaipIdentifier>(id: &T) -> Vec<u8> {
    id.to_string().into_bytes()
}

/// Parse raw bytes holding a canonical form. Non-UTF-8 input is a decoding error.
pub fn from_text<T: CaipIdentifier>(data: &[u8]) -> Result<T> {
    let s = std::str::from_utf8(data)
        .map_err(|e| CaipError::Decoding(format!("{} is not UTF-8: {}", T::KIND, e)))?;
    s.parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AccountId, ChainId};

    #[test]
    fn test_text_roundtrip() {
        let id = AccountId::must_parse(
            "solana:5eykt4UsFv8P8NJdTREpY1vzqKqZKvdp:7S3P4HxJpyyigGzodYwHtCxZyUQe9JiBMHyRWXArAaKv",
        );
        let bytes = to_text(&id);
        assert_eq!(bytes, id.to_string().as_bytes());
        assert_eq!(from_text::<AccountId>(&bytes).unwrap(), id);
    }

    #[test]
    fn test_invalid_utf8() {
        let err = from_text::<ChainId>(&[0x65, 0xff, 0x3a, 0x31]).unwrap_err();
        assert!(matches!(err, CaipError::Decoding(_)));
    }

    #[test]
    fn test_text_is_not_trimmed() {
        assert!(from_text::<ChainId>(b"eip155:1\n").is_err());
    }
}
