//! The contract shared by every identifier type.
//!
//! Bridges in [`crate::codec`] are written once against [`CaipIdentifier`]
//! and only ever go through `parse` and `Display`.

use std::fmt;
use std::str::FromStr;

use crate::error::CaipError;

/// Which identifier a value, error, or log event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentifierKind {
    Chain,
    Account,
    Asset,
    Transaction,
}

impl IdentifierKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            IdentifierKind::Chain => "chain id",
            IdentifierKind::Account => "account id",
            IdentifierKind::Asset => "asset id",
            IdentifierKind::Transaction => "transaction id",
        }
    }
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated identifier with a canonical string form.
///
/// `Display` must produce the canonical form and `FromStr` must accept
/// exactly that form, so that `s.parse::<T>()?.to_string() == s` for every
/// valid `s`.
pub trait CaipIdentifier:
    Clone + fmt::Debug + fmt::Display + FromStr<Err = CaipError> + Send + Sync + 'static
{
    const KIND: IdentifierKind;

    /// The canonical string form.
    fn canonical(&self) -> String {
        self.to_string()
    }
}
