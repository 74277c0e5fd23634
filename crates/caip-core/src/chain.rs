//! Chain identifiers: `namespace:reference` (CAIP-2).

use std::fmt;
use std::str::FromStr;

use crate::error::{CaipError, Result, ValidationError};
use crate::grammar::{self, SEGMENT_DELIMITER};
use crate::identifier::{CaipIdentifier, IdentifierKind};

/// Identifies a blockchain, e.g. `eip155:1` or `cosmos:cosmoshub-3`.
///
/// Only [`ChainId::new`] and [`ChainId::parse`] validate; an instance built
/// through either is always well-formed.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChainId {
    namespace: String,
    reference: String,
}

impl ChainId {
    /// Create a chain id, validating both components.
    pub fn new(
        namespace: impl Into<String>,
        reference: impl Into<String>,
    ) -> std::result::Result<Self, ValidationError> {
        let id = Self::new_unchecked(namespace, reference);
        id.validate()?;
        Ok(id)
    }

    /// Create a chain id without validating.
    ///
    /// The caller guarantees both components already satisfy the grammar,
    /// e.g. when reassembling from a validated parent. Never feed this
    /// untrusted input.
    pub fn new_unchecked(namespace: impl Into<String>, reference: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            reference: reference.into(),
        }
    }

    /// Check both components against the grammar.
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        if !grammar::is_chain_namespace(&self.namespace) {
            return Err(ValidationError::InvalidNamespace(self.namespace.clone()));
        }
        if !grammar::is_chain_reference(&self.reference) {
            return Err(ValidationError::InvalidReference(self.reference.clone()));
        }
        Ok(())
    }

    /// Parse the canonical form. Splits on the first `:` only.
    pub fn parse(s: &str) -> Result<Self> {
        let (namespace, reference) = grammar::split_first(s, SEGMENT_DELIMITER, IdentifierKind::Chain)?;
        Ok(Self::new(namespace, reference)?)
    }

    /// Parse a literal known to be valid.
    ///
    /// # Panics
    ///
    /// Panics if `s` is not a valid chain id.
    #[track_caller]
    pub fn must_parse(s: &str) -> Self {
        match Self::parse(s) {
            Ok(id) => id,
            Err(e) => panic!("invalid chain id literal {s:?}: {e}"),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn reference(&self) -> &str {
        &self.reference
    }
}

impl CaipIdentifier for ChainId {
    const KIND: IdentifierKind = IdentifierKind::Chain;
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.namespace, SEGMENT_DELIMITER, self.reference)
    }
}

impl fmt::Debug for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ChainId({})", self)
    }
}

impl FromStr for ChainId {
    type Err = CaipError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for ChainId {
    type Error = CaipError;

    fn try_from(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_format() {
        let id = ChainId::parse("eip155:1").unwrap();
        assert_eq!(id.namespace(), "eip155");
        assert_eq!(id.reference(), "1");
        assert_eq!(id.to_string(), "eip155:1");
    }

    #[test]
    fn test_new_matches_parse() {
        let built = ChainId::new("cosmos", "cosmoshub-3").unwrap();
        let parsed: ChainId = "cosmos:cosmoshub-3".parse().unwrap();
        assert_eq!(built, parsed);
    }

    #[test]
    fn test_short_namespace_rejected() {
        let err = ChainId::parse("xx:1").unwrap_err();
        assert!(matches!(
            err,
            CaipError::Validation(ValidationError::InvalidNamespace(ref ns)) if ns == "xx"
        ));
    }

    #[test]
    fn test_missing_delimiter_is_format_error() {
        let err = ChainId::parse("eip155").unwrap_err();
        assert!(matches!(err, CaipError::Format { expected: 2, found: 1, .. }));
    }

    #[test]
    fn test_extra_segment_lands_in_reference() {
        // Split limit is 2, so the colon stays in the reference and fails there.
        let err = ChainId::parse("eip155:1:2").unwrap_err();
        assert!(matches!(
            err,
            CaipError::Validation(ValidationError::InvalidReference(ref r)) if r == "1:2"
        ));
    }

    #[test]
    fn test_invalid_reference() {
        let err = ChainId::new("eip155", "a".repeat(33)).unwrap_err();
        assert_eq!(err.field(), "reference");
    }

    #[test]
    fn test_unchecked_then_validate() {
        let id = ChainId::new_unchecked("EIP155", "1");
        assert!(matches!(id.validate(), Err(ValidationError::InvalidNamespace(_))));
    }

    #[test]
    #[should_panic(expected = "invalid chain id literal")]
    fn test_must_parse_panics() {
        ChainId::must_parse("nope");
    }

    #[test]
    fn test_debug() {
        let id = ChainId::must_parse("eip155:1");
        assert_eq!(format!("{:?}", id), "ChainId(eip155:1)");
    }
}
