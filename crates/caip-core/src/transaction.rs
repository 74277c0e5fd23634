//! Transaction identifiers: `namespace:reference:hash`.

use std::fmt;
use std::str::FromStr;

use crate::chain::ChainId;
use crate::error::{CaipError, Result, ValidationError};
use crate::grammar::{self, SEGMENT_DELIMITER};
use crate::identifier::{CaipIdentifier, IdentifierKind};

#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TransactionId {
    chain_id: ChainId,
    hash: String,
}

impl TransactionId {
    pub fn new(
        chain_id: ChainId,
        hash: impl Into<String>,
    ) -> std::result::Result<Self, ValidationError> {
        let id = Self::new_unchecked(chain_id, hash);
        id.validate()?;
        Ok(id)
    }

    /// Create a transaction id without validating. Trusted input only.
    pub fn new_unchecked(chain_id: ChainId, hash: impl Into<String>) -> Self {
        Self {
            chain_id,
            hash: hash.into(),
        }
    }

    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        self.chain_id.validate()?;
        if !grammar::is_transaction_hash(&self.hash) {
            return Err(ValidationError::InvalidHash(self.hash.clone()));
        }
        Ok(())
    }

    /// Parse the canonical form. Requires exactly three `:`-separated segments.
    pub fn parse(s: &str) -> Result<Self> {
        let [namespace, reference, hash] =
            grammar::split_exact::<3>(s, SEGMENT_DELIMITER, IdentifierKind::Transaction)?;
        let chain_id = ChainId::new_unchecked(namespace, reference);
        Ok(Self::new(chain_id, hash)?)
    }

    /// # Panics
    ///
    /// Panics if `s` is not a valid transaction id.
    #[track_caller]
    pub fn must_parse(s: &str) -> Self {
        match Self::parse(s) {
            Ok(id) => id,
            Err(e) => panic!("invalid transaction id literal {s:?}: {e}"),
        }
    }

    pub fn chain_id(&self) -> &ChainId {
        &self.chain_id
    }

    pub fn hash(&self) -> &str {
        &self.hash
    }
}

impl CaipIdentifier for TransactionId {
    const KIND: IdentifierKind = IdentifierKind::Transaction;
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.chain_id, SEGMENT_DELIMITER, self.hash)
    }
}

impl fmt::Debug for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TransactionId({})", self)
    }
}

impl FromStr for TransactionId {
    type Err = CaipError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for TransactionId {
    type Error = CaipError;

    fn try_from(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
