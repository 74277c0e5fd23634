//! Proptest strategies for identifier components and whole identifiers.

use proptest::prelude::*;

use caip_core::{AccountId, AssetId, CaipIdentifier, ChainId, IdentifierKind, TransactionId};

/// A valid chain namespace.
pub fn chain_namespace() -> impl Strategy<Value = String> {
    "[-a-z0-9]{3,8}"
}

/// A valid chain reference.
pub fn chain_reference() -> impl Strategy<Value = String> {
    "[-a-zA-Z0-9]{1,32}"
}

/// A valid account address.
pub fn address() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9]{1,64}"
}

/// A valid asset namespace.
pub fn asset_namespace() -> impl Strategy<Value = String> {
    "[-a-z0-9]{3,8}"
}

/// A valid asset reference, sometimes with a token id suffix.
pub fn asset_reference() -> impl Strategy<Value = String> {
    "[-a-zA-Z0-9]{1,64}(/[-.%a-zA-Z0-9]{1,78})?"
}

/// A valid transaction hash.
pub fn tx_hash() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9]{1,128}"
}

/// A chain namespace that violates the grammar.
pub fn invalid_chain_namespace() -> impl Strategy<Value = String> {
    prop_oneof![
        "[-a-z0-9]{0,2}",
        "[-a-z0-9]{9,16}",
        "[-a-z0-9]{0,3}[A-Z_.%/ ][-a-z0-9]{0,3}",
    ]
}

/// Any short string over the identifier alphabet plus the delimiters and a
/// few characters no grammar allows.
pub fn any_component() -> impl Strategy<Value = String> {
    "[-a-zA-Z0-9_.%:/ ]{0,140}"
}

pub fn chain_id() -> impl Strategy<Value = ChainId> {
    (chain_namespace(), chain_reference()).prop_map(|(ns, r)| ChainId::new_unchecked(ns, r))
}

pub fn account_id() -> impl Strategy<Value = AccountId> {
    (chain_id(), address()).prop_map(|(chain, a)| AccountId::new_unchecked(chain, a))
}

pub fn asset_id() -> impl Strategy<Value = AssetId> {
    (chain_id(), asset_namespace(), asset_reference())
        .prop_map(|(chain, ns, r)| AssetId::new_unchecked(chain, ns, r))
}

pub fn transaction_id() -> impl Strategy<Value = TransactionId> {
    (chain_id(), tx_hash()).prop_map(|(chain, h)| TransactionId::new_unchecked(chain, h))
}

/// An identifier of any kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnyId {
    Chain(ChainId),
    Account(AccountId),
    Asset(AssetId),
    Transaction(TransactionId),
}

impl AnyId {
    pub fn kind(&self) -> IdentifierKind {
        match self {
            AnyId::Chain(_) => ChainId::KIND,
            AnyId::Account(_) => AccountId::KIND,
            AnyId::Asset(_) => AssetId::KIND,
            AnyId::Transaction(_) => TransactionId::KIND,
        }
    }

    pub fn canonical(&self) -> String {
        match self {
            AnyId::Chain(id) => id.canonical(),
            AnyId::Account(id) => id.canonical(),
            AnyId::Asset(id) => id.canonical(),
            AnyId::Transaction(id) => id.canonical(),
        }
    }

    /// Parse `s` as an identifier of the given kind.
    pub fn parse(kind: IdentifierKind, s: &str) -> caip_core::Result<Self> {
        Ok(match kind {
            IdentifierKind::Chain => AnyId::Chain(s.parse()?),
            IdentifierKind::Account => AnyId::Account(s.parse()?),
            IdentifierKind::Asset => AnyId::Asset(s.parse()?),
            IdentifierKind::Transaction => AnyId::Transaction(s.parse()?),
        })
    }
}

impl Arbitrary for AnyId {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            chain_id().prop_map(AnyId::Chain),
            account_id().prop_map(AnyId::Account),
            asset_id().prop_map(AnyId::Asset),
            transaction_id().prop_map(AnyId::Transaction),
        ]
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn test_generated_ids_validate(id: AnyId) {
            let valid = match &id {
                AnyId::Chain(c) => c.validate(),
                AnyId::Account(a) => a.validate(),
                AnyId::Asset(a) => a.validate(),
                AnyId::Transaction(t) => t.validate(),
            };
            prop_assert!(valid.is_ok(), "{:?}", valid);
        }

        #[test]
        fn test_invalid_namespace_never_validates(
            ns in invalid_chain_namespace(),
            r in chain_reference(),
        ) {
            prop_assert!(ChainId::new(ns, r).is_err());
        }

        #[test]
        fn test_parse_by_kind_matches_generated(id: AnyId) {
            let parsed = AnyId::parse(id.kind(), &id.canonical()).unwrap();
            prop_assert_eq!(parsed, id);
        }
    }
}
