//! Component grammars and the splitting helpers shared by every identifier.
//!
//! Patterns are compiled once on first use and anchored on both ends: a
//! component is valid only if the whole string matches.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{CaipError, Result};
use crate::identifier::IdentifierKind;

/// Delimiter between the chain segments and the address or hash.
pub const SEGMENT_DELIMITER: char = ':';

/// Delimiter between the chain and the asset segment.
pub const ASSET_DELIMITER: char = '/';

static CHAIN_NAMESPACE: Lazy<Regex> = Lazy::new(|| compile(r"^[-a-z0-9]{3,8}$"));
static CHAIN_REFERENCE: Lazy<Regex> = Lazy::new(|| compile(r"^[-a-zA-Z0-9]{1,32}$"));
static ACCOUNT_ADDRESS: Lazy<Regex> = Lazy::new(|| compile(r"^[a-zA-Z0-9]{1,64}$"));
static ASSET_NAMESPACE: Lazy<Regex> = Lazy::new(|| compile(r"^[-a-z0-9]{3,8}$"));
// CAIP-19: an optional `/token_id` suffix addresses a single token of a collection.
static ASSET_REFERENCE: Lazy<Regex> =
    Lazy::new(|| compile(r"^[-a-zA-Z0-9]{1,64}(/[-.%a-zA-Z0-9]{1,78})?$"));
static TRANSACTION_HASH: Lazy<Regex> = Lazy::new(|| compile(r"^[a-zA-Z0-9]{1,128}$"));

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("identifier grammar patterns are valid")
}

pub fn is_chain_namespace(s: &str) -> bool {
    CHAIN_NAMESPACE.is_match(s)
}

pub fn is_chain_reference(s: &str) -> bool {
    CHAIN_REFERENCE.is_match(s)
}

pub fn is_account_address(s: &str) -> bool {
    ACCOUNT_ADDRESS.is_match(s)
}

pub fn is_asset_namespace(s: &str) -> bool {
    ASSET_NAMESPACE.is_match(s)
}

pub fn is_asset_reference(s: &str) -> bool {
    ASSET_REFERENCE.is_match(s)
}

pub fn is_transaction_hash(s: &str) -> bool {
    TRANSACTION_HASH.is_match(s)
}

/// Split `input` on every `delimiter` and require exactly `N` segments.
pub(crate) fn split_exact<const N: usize>(
    input: &str,
    delimiter: char,
    kind: IdentifierKind,
) -> Result<[&str; N]> {
    let segments: Vec<&str> = input.split(delimiter).collect();
    let found = segments.len();
    segments
        .try_into()
        .map_err(|_| CaipError::Format {
            kind,
            input: input.to_owned(),
            expected: N,
            found,
        })
}

/// Split `input` on the first `delimiter` only. The remainder keeps any
/// further delimiters.
pub(crate) fn split_first<'a>(
    input: &'a str,
    delimiter: char,
    kind: IdentifierKind,
) -> Result<(&'a str, &'a str)> {
    input.split_once(delimiter).ok_or_else(|| CaipError::Format {
        kind,
        input: input.to_owned(),
        expected: 2,
        found: 1,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_patterns_are_anchored() {
        assert!(is_chain_namespace("eip155"));
        assert!(!is_chain_namespace("xx"));
        assert!(!is_chain_namespace("eip155 "));
        assert!(!is_chain_namespace("EIP155"));
        assert!(!is_chain_namespace("namespace9"));
        assert!(!is_account_address("0xab:cd"));
        assert!(!is_transaction_hash(""));
    }

    #[test]
    fn test_length_bounds() {
        assert!(is_chain_reference(&"a".repeat(32)));
        assert!(!is_chain_reference(&"a".repeat(33)));
        assert!(is_account_address(&"a".repeat(64)));
        assert!(!is_account_address(&"a".repeat(65)));
        assert!(is_transaction_hash(&"a".repeat(128)));
        assert!(!is_transaction_hash(&"a".repeat(129)));
        assert!(is_asset_reference(&"a".repeat(64)));
        assert!(!is_asset_reference(&"a".repeat(65)));
    }

    #[test]
    fn test_asset_reference_token_suffix() {
        assert!(is_asset_reference(
            "0x06012c8cf97BEaD5deAe237070F9587f8E7A266d/771769"
        ));
        assert!(!is_asset_reference("0x06012c8cf97BEaD5deAe237070F9587f8E7A266d/"));
        assert!(!is_asset_reference("abc/1/2"));
    }

    #[test]
    fn test_split_exact_counts_every_delimiter() {
        let [a, b, c] = split_exact::<3>("a:b:c", ':', IdentifierKind::Account).unwrap();
        assert_eq!((a, b, c), ("a", "b", "c"));

        let err = split_exact::<3>("a:b:c:d", ':', IdentifierKind::Account).unwrap_err();
        assert!(matches!(err, CaipError::Format { expected: 3, found: 4, .. }));

        let err = split_exact::<3>("a", ':', IdentifierKind::Account).unwrap_err();
        assert!(matches!(err, CaipError::Format { expected: 3, found: 1, .. }));
    }

    #[test]
    fn test_split_first_keeps_remainder() {
        let (head, tail) = split_first("a:b:c", ':', IdentifierKind::Chain).unwrap();
        assert_eq!(head, "a");
        assert_eq!(tail, "b:c");
        assert!(split_first("abc", ':', IdentifierKind::Chain).is_err());
    }

    proptest! {
        #[test]
        fn test_reference_accepts_exactly_up_to_limit(len in 0usize..48, c in "[-a-zA-Z0-9]") {
            let s = c.repeat(len);
            prop_assert_eq!(is_chain_reference(&s), (1..=32).contains(&len));
        }

        #[test]
        fn test_namespace_rejects_upper_case(s in "[A-Z][-a-z0-9]{2,7}") {
            prop_assert!(!is_chain_namespace(&s));
            prop_assert!(!is_asset_namespace(&s));
            prop_assert!(is_chain_namespace(&s.to_lowercase()));
        }

        #[test]
        fn test_token_suffix_bounds(base in "[-a-zA-Z0-9]{1,64}", len in 0usize..90) {
            let s = format!("{}/{}", base, "7".repeat(len));
            prop_assert_eq!(is_asset_reference(&s), (1..=78).contains(&len));
        }
    }
}
