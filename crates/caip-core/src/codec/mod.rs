//! Codec bridges between identifiers and external representations.
//!
//! Every bridge goes through the identifier's canonical string: encoding
//! calls `Display`, decoding calls `FromStr`. No bridge inspects the grammar.
//!
//! | Bridge   | Representation                                   |
//! |----------|--------------------------------------------------|
//! | [`text`] | canonical form as raw UTF-8 bytes                |
//! | [`json`] | one JSON string; `null` leaves the target unset  |
//! | [`wire`] | one string field; CBOR text string on the wire   |
//! | [`sql`]  | one nullable TEXT column                         |
//! | [`scalar`] | quoted API scalar literal                      |

use std::fmt;
use std::marker::PhantomData;

use rusqlite::types::{FromSql, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::{Serialize, Serializer};

use crate::account::AccountId;
use crate::asset::AssetId;
use crate::chain::ChainId;
use crate::identifier::CaipIdentifier;
use crate::transaction::TransactionId;

pub mod json;
pub mod scalar;
pub mod sql;
pub mod text;
pub mod wire;

pub use scalar::{ScalarCase, ScalarCodec, ScalarConfig};

/// Deserializes any identifier from a string (or UTF-8 bytes) via `FromStr`.
struct CanonicalVisitor<T>(PhantomData<T>);

impl<'de, T: CaipIdentifier> Visitor<'de> for CanonicalVisitor<T> {
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a {} string", T::KIND)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<T, E> {
        v.parse().map_err(E::custom)
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<T, E> {
        let s = std::str::from_utf8(v).map_err(E::custom)?;
        self.visit_str(s)
    }
}

macro_rules! impl_canonical_codecs {
    ($($ty:ty),+ $(,)?) => {$(
        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                deserializer.deserialize_str(CanonicalVisitor::<$ty>(PhantomData))
            }
        }

        impl ToSql for $ty {
            fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
                Ok(sql::to_column(self))
            }
        }

        impl FromSql for $ty {
            fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
                sql::from_column(value)
            }
        }
    )+};
}

impl_canonical_codecs!(ChainId, AccountId, AssetId, TransactionId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_uses_canonical_string() {
        let id = AssetId::must_parse("eip155:1/erc20:0x6b175474e89094c44da98b954eedeac495271d0f");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(
            json,
            "\"eip155:1/erc20:0x6b175474e89094c44da98b954eedeac495271d0f\""
        );
        let back: AssetId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_deserialize_rejects_invalid() {
        let err = serde_json::from_str::<ChainId>("\"xx:1\"").unwrap_err();
        assert!(err.to_string().contains("chain namespace"));
    }

    #[test]
    fn test_deserialize_rejects_non_string() {
        assert!(serde_json::from_str::<ChainId>("42").is_err());
        assert!(serde_json::from_str::<ChainId>("{\"namespace\":\"eip155\"}").is_err());
    }

    #[test]
    fn test_option_null_is_none() {
        let id: Option<AccountId> = serde_json::from_str("null").unwrap();
        assert!(id.is_none());
    }

    #[derive(serde::Serialize, serde::Deserialize, PartialEq, Debug)]
    struct Transfer {
        from: AccountId,
        asset: AssetId,
        tx: Option<TransactionId>,
    }

    #[test]
    fn test_nested_in_struct() {
        let transfer = Transfer {
            from: AccountId::must_parse("eip155:1:0xab16a96d359ec26a11e2c2b3d8f8b8942d5bfcdb"),
            asset: AssetId::must_parse("eip155:1/slip44:60"),
            tx: None,
        };
        let json = serde_json::to_value(&transfer).unwrap();
        assert_eq!(
            json["from"],
            "eip155:1:0xab16a96d359ec26a11e2c2b3d8f8b8942d5bfcdb"
        );
        assert!(json["tx"].is_null());

        let back: Transfer = serde_json::from_value(json).unwrap();
        assert_eq!(back, transfer);
    }
}
