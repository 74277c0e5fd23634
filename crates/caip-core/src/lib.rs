//! # CAIP Core
//!
//! Chain-agnostic blockchain identifiers: chains, accounts, assets, and
//! transactions, each with a strict grammar and a single canonical string.
//!
//! This crate only checks syntax. It does not know what `eip155` or
//! `cosmos` mean and never talks to a chain.
//!
//! ## Key Types
//!
//! - [`ChainId`] - `namespace:reference` (CAIP-2)
//! - [`AccountId`] - `chain:address` (CAIP-10)
//! - [`AssetId`] - `chain/namespace:reference` (CAIP-19)
//! - [`TransactionId`] - `chain:hash`
//!
//! An identifier can only be obtained through `new` or `parse`, both of
//! which validate. `Display` is the canonical form, and for every valid
//! string `s`, `T::parse(s)?.to_string() == s`.
//!
//! ```rust
//! use caip_core::{AssetId, ChainId};
//!
//! let chain = ChainId::parse("eip155:1").unwrap();
//! assert_eq!(chain.namespace(), "eip155");
//!
//! let kitty: AssetId = "eip155:1/erc721:0x06012c8cf97BEaD5deAe237070F9587f8E7A266d/771769"
//!     .parse()
//!     .unwrap();
//! assert_eq!(kitty.token_id(), Some("771769"));
//! ```
//!
//! ## Codec Bridges
//!
//! See [`codec`]: canonical text, JSON (serde), wire/CBOR, SQLite columns
//! (rusqlite), and API scalars. All of them route through `parse` and
//! `Display`.

pub mod account;
pub mod asset;
pub mod chain;
pub mod codec;
pub mod error;
pub mod grammar;
pub mod identifier;
pub mod transaction;

pub use account::AccountId;
pub use asset::AssetId;
pub use chain::ChainId;
pub use codec::{ScalarCase, ScalarCodec, ScalarConfig};
pub use error::{CaipError, Result, ValidationError};
pub use identifier::{CaipIdentifier, IdentifierKind};
pub use transaction::TransactionId;
