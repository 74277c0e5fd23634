//! Structured-document bridge.
//!
//! An identifier is a single JSON string holding its canonical form. On
//! decode, `null` means "unset": [`unmarshal_into`] leaves the target as it
//! was, and [`from_json`] yields `None`.

use std::borrow::Cow;

use serde_json::Value;

use crate::error::{CaipError, Result};
use crate::identifier::CaipIdentifier;

const NULL: &str = "null";

/// Encode as a quoted JSON string.
pub fn to_json<T: CaipIdentifier>(id: &T) -> String {
    Value::String(id.to_string()).to_string()
}

/// Decode a JSON document that is either a string or `null`.
pub fn from_json<T: CaipIdentifier>(data: &[u8]) -> Result<Option<T>> {
    let value: Option<String> =
        serde_json::from_slice(data).map_err(|e| CaipError::Decoding(e.to_string()))?;
    value.map(|s| s.parse()).transpose()
}

/// Decode into an existing field.
///
/// `null` is a no-op. A quoted document has one layer of quotes removed
/// (JSON escapes are honoured) and may carry surrounding JSON whitespace.
/// Unquoted text is parsed exactly as given, like the text bridge. On error
/// the target is not modified.
pub fn unmarshal_into<T: CaipIdentifier>(target: &mut T, data: &[u8]) -> Result<()> {
    let text = std::str::from_utf8(data)
        .map_err(|e| CaipError::Decoding(format!("{} is not UTF-8: {}", T::KIND, e)))?;
    let document = text.trim();

    if document == NULL {
        tracing::trace!(kind = %T::KIND, "json null, leaving identifier unset");
        return Ok(());
    }

    let canonical = match unquote_if_quoted(document)? {
        Some(unquoted) => Cow::Owned(unquoted),
        None => Cow::Borrowed(text),
    };
    *target = canonical.parse()?;
    Ok(())
}

fn unquote_if_quoted(text: &str) -> Result<Option<String>> {
    if text.len() >= 2 && text.starts_with('"') && text.ends_with('"') {
        let unquoted: String =
            serde_json::from_str(text).map_err(|e| CaipError::Decoding(e.to_string()))?;
        Ok(Some(unquoted))
    } else {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AssetId, ChainId, TransactionId, ValidationError};

    #[test]
    fn test_to_json_quotes_canonical_form() {
        let id = ChainId::must_parse("cosmos:Binance-Chain-Tigris");
        assert_eq!(to_json(&id), "\"cosmos:Binance-Chain-Tigris\"");
    }

    #[test]
    fn test_unmarshal_null_leaves_target() {
        let original = ChainId::must_parse("eip155:1");
        let mut target = original.clone();
        unmarshal_into(&mut target, b"null").unwrap();
        assert_eq!(target, original);

        unmarshal_into(&mut target, b"  null ").unwrap();
        assert_eq!(target, original);
    }

    #[test]
    fn test_unmarshal_quoted_and_bare() {
        let mut target = ChainId::must_parse("eip155:1");

        unmarshal_into(&mut target, b"\"cosmos:cosmoshub-3\"").unwrap();
        assert_eq!(target.to_string(), "cosmos:cosmoshub-3");

        unmarshal_into(&mut target, b"lip9:9ee11e9df416b18b").unwrap();
        assert_eq!(target.to_string(), "lip9:9ee11e9df416b18b");
    }

    #[test]
    fn test_unmarshal_bare_text_is_not_trimmed() {
        let original = ChainId::must_parse("eip155:1");
        let mut target = original.clone();

        assert!(unmarshal_into(&mut target, b"  eip155:2  ").is_err());
        assert!(unmarshal_into(&mut target, b"eip155:2\n").is_err());
        assert_eq!(target, original);

        unmarshal_into(&mut target, b" \"eip155:2\"\n").unwrap();
        assert_eq!(target.to_string(), "eip155:2");
    }

    #[test]
    fn test_unmarshal_honours_escapes() {
        let mut target = AssetId::must_parse("eip155:1/slip44:60");
        unmarshal_into(&mut target, br#""eip155:1\/slip44:714""#).unwrap();
        assert_eq!(target.to_string(), "eip155:1/slip44:714");
    }

    #[test]
    fn test_unmarshal_error_keeps_target() {
        let original = TransactionId::must_parse("eip155:1:0xabc");
        let mut target = original.clone();
        let err = unmarshal_into(&mut target, b"\"eip155:1:0x-bad\"").unwrap_err();
        assert!(matches!(
            err,
            CaipError::Validation(ValidationError::InvalidHash(_))
        ));
        assert_eq!(target, original);
    }

    #[test]
    fn test_from_json() {
        assert_eq!(from_json::<ChainId>(b"null").unwrap(), None);
        assert_eq!(
            from_json::<ChainId>(b"\"eip155:1\"").unwrap(),
            Some(ChainId::must_parse("eip155:1"))
        );
        assert!(matches!(
            from_json::<ChainId>(b"7").unwrap_err(),
            CaipError::Decoding(_)
        ));
        assert!(matches!(
            from_json::<ChainId>(b"\"eip155\"").unwrap_err(),
            CaipError::Format { .. }
        ));
    }
}
