//! Asset identifiers: `chain/namespace:reference` (CAIP-19).
//!
//! The asset reference may carry a single `/token_id` suffix naming one
//! token of a collection, e.g.
//! `eip155:1/erc721:0x06012c8cf97BEaD5deAe237070F9587f8E7A266d/771769`.
//! Only the first `/` of the whole identifier is a delimiter; the suffix is
//! part of the reference.

use std::fmt;
use std::str::FromStr;

use crate::chain::ChainId;
use crate::error::{CaipError, Result, ValidationError};
use crate::grammar::{self, ASSET_DELIMITER, SEGMENT_DELIMITER};
use crate::identifier::{CaipIdentifier, IdentifierKind};

#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AssetId {
    chain_id: ChainId,
    namespace: String,
    reference: String,
}

impl AssetId {
    /// Create an asset id, validating the chain and both asset components.
    pub fn new(
        chain_id: ChainId,
        namespace: impl Into<String>,
        reference: impl Into<String>,
    ) -> std::result::Result<Self, ValidationError> {
        let id = Self::new_unchecked(chain_id, namespace, reference);
        id.validate()?;
        Ok(id)
    }

    /// Create an asset id without validating. Trusted input only.
    pub fn new_unchecked(
        chain_id: ChainId,
        namespace: impl Into<String>,
        reference: impl Into<String>,
    ) -> Self {
        Self {
            chain_id,
            namespace: namespace.into(),
            reference: reference.into(),
        }
    }

    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        self.chain_id.validate()?;
        if !grammar::is_asset_namespace(&self.namespace) {
            return Err(ValidationError::InvalidAssetNamespace(self.namespace.clone()));
        }
        if !grammar::is_asset_reference(&self.reference) {
            return Err(ValidationError::InvalidAssetReference(self.reference.clone()));
        }
        Ok(())
    }

    /// Parse the canonical form.
    ///
    /// Splits on the first `/` into chain and asset segments, parses the
    /// chain segment as a [`ChainId`], then splits the asset segment on its
    /// first `:`.
    pub fn parse(s: &str) -> Result<Self> {
        let (chain, asset) = grammar::split_first(s, ASSET_DELIMITER, IdentifierKind::Asset)?;
        let chain_id = ChainId::parse(chain)?;
        let (namespace, reference) =
            grammar::split_first(asset, SEGMENT_DELIMITER, IdentifierKind::Asset).map_err(
                |_| CaipError::Format {
                    kind: IdentifierKind::Asset,
                    input: s.to_owned(),
                    expected: 2,
                    found: 1,
                },
            )?;
        Ok(Self::new(chain_id, namespace, reference)?)
    }

    /// # Panics
    ///
    /// Panics if `s` is not a valid asset id.
    #[track_caller]
    pub fn must_parse(s: &str) -> Self {
        match Self::parse(s) {
            Ok(id) => id,
            Err(e) => panic!("invalid asset id literal {s:?}: {e}"),
        }
    }

    pub fn chain_id(&self) -> &ChainId {
        &self.chain_id
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The full asset reference, including any token id suffix.
    pub fn reference(&self) -> &str {
        &self.reference
    }

    /// The asset reference without the token id suffix.
    pub fn asset_reference(&self) -> &str {
        self.reference
            .split_once(ASSET_DELIMITER)
            .map_or(self.reference.as_str(), |(asset, _)| asset)
    }

    /// The token id suffix, if this id names a single token.
    pub fn token_id(&self) -> Option<&str> {
        self.reference
            .split_once(ASSET_DELIMITER)
            .map(|(_, token)| token)
    }
}

impl CaipIdentifier for AssetId {
    const KIND: IdentifierKind = IdentifierKind::Asset;
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}{}",
            self.chain_id, ASSET_DELIMITER, self.namespace, SEGMENT_DELIMITER, self.reference
        )
    }
}

impl fmt::Debug for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AssetId({})", self)
    }
}

impl FromStr for AssetId {
    type Err = CaipError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for AssetId {
    type Error = CaipError;

    fn try_from(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
