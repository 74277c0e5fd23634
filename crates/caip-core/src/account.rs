//! Account identifiers: `namespace:reference:address` (CAIP-10).

use std::fmt;
use std::str::FromStr;

use crate::chain::ChainId;
use crate::error::{CaipError, Result, ValidationError};
use crate::grammar::{self, SEGMENT_DELIMITER};
use crate::identifier::{CaipIdentifier, IdentifierKind};

/// An address on a specific chain.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccountId {
    chain_id: ChainId,
    address: String,
}

impl AccountId {
    /// Create an account id, validating the chain and the address.
    pub fn new(
        chain_id: ChainId,
        address: impl Into<String>,
    ) -> std::result::Result<Self, ValidationError> {
        let id = Self::new_unchecked(chain_id, address);
        id.validate()?;
        Ok(id)
    }

    /// Create an account id without validating. Trusted input only.
    pub fn new_unchecked(chain_id: ChainId, address: impl Into<String>) -> Self {
        Self {
            chain_id,
            address: address.into(),
        }
    }

    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        self.chain_id.validate()?;
        if !grammar::is_account_address(&self.address) {
            return Err(ValidationError::InvalidAddress(self.address.clone()));
        }
        Ok(())
    }

    /// Parse the canonical form. Requires exactly three `:`-separated segments.
    pub fn parse(s: &str) -> Result<Self> {
        let [namespace, reference, address] =
            grammar::split_exact::<3>(s, SEGMENT_DELIMITER, IdentifierKind::Account)?;
        let chain_id = ChainId::new_unchecked(namespace, reference);
        Ok(Self::new(chain_id, address)?)
    }

    /// # Panics
    ///
    /// Panics if `s` is not a valid account id.
    #[track_caller]
    pub fn must_parse(s: &str) -> Self {
        match Self::parse(s) {
            Ok(id) => id,
            Err(e) => panic!("invalid account id literal {s:?}: {e}"),
        }
    }

    pub fn chain_id(&self) -> &ChainId {
        &self.chain_id
    }

    pub fn address(&self) -> &str {
        &self.address
    }
}

impl CaipIdentifier for AccountId {
    const KIND: IdentifierKind = IdentifierKind::Account;
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.chain_id, SEGMENT_DELIMITER, self.address)
    }
}

impl fmt::Debug for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccountId({})", self)
    }
}

impl FromStr for AccountId {
    type Err = CaipError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for AccountId {
    type Error = CaipError;

    fn try_from(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COSMOS: &str = "cosmos:cosmoshub-3:cosmos1t2uflqwqe0fsj0shcfkrvpukewcw40yjj6hdc0";

    #[test]
    fn test_roundtrip() {
        let id = AccountId::parse(COSMOS).unwrap();
        assert_eq!(id.chain_id(), &ChainId::must_parse("cosmos:cosmoshub-3"));
        assert_eq!(id.address(), "cosmos1t2uflqwqe0fsj0shcfkrvpukewcw40yjj6hdc0");
        assert_eq!(id.to_string(), COSMOS);
    }

    #[test]
    fn test_four_segments_rejected() {
        let err = AccountId::parse("eip155:1:extra:segment").unwrap_err();
        assert!(matches!(err, CaipError::Format { expected: 3, found: 4, .. }));
    }

    #[test]
    fn test_one_segment_rejected() {
        let err = AccountId::parse("eip155").unwrap_err();
        assert!(matches!(err, CaipError::Format { expected: 3, found: 1, .. }));
    }

    #[test]
    fn test_chain_errors_surface() {
        let err = AccountId::parse("xx:1:0xab").unwrap_err();
        assert!(matches!(
            err,
            CaipError::Validation(ValidationError::InvalidNamespace(_))
        ));
    }

    #[test]
    fn test_invalid_address() {
        let chain = ChainId::must_parse("eip155:1");
        let err = AccountId::new(chain.clone(), "0xab-cd").unwrap_err();
        assert_eq!(err, ValidationError::InvalidAddress("0xab-cd".into()));

        let err = AccountId::new(chain, "a".repeat(65)).unwrap_err();
        assert_eq!(err.field(), "address");
    }

    #[test]
    fn test_empty_address() {
        let err = AccountId::parse("eip155:1:").unwrap_err();
        assert!(matches!(
            err,
            CaipError::Validation(ValidationError::InvalidAddress(ref a)) if a.is_empty()
        ));
    }
}
