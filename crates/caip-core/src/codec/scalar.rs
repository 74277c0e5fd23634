//! API scalar bridge (GraphQL-style custom scalars).
//!
//! Encoding writes the identifier as a quoted string literal. Decoding
//! accepts only string inputs; any other input kind is an error rather than
//! a silent no-op, so a stale value is never kept by accident.
//!
//! [`ScalarCase::Upper`] reproduces the legacy upper-cased display form. It
//! is for display only: namespaces are lowercase by grammar, so an
//! upper-cased literal does not decode back.

use std::io;

use serde_json::Value;

use crate::error::{CaipError, Result};
use crate::identifier::CaipIdentifier;

/// Letter case applied to the literal on encode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScalarCase {
    /// Canonical form, unchanged. Round-trips through [`ScalarCodec::unmarshal`].
    #[default]
    Preserve,
    /// Upper-cased display form.
    Upper,
}

/// Configuration for the scalar bridge.
#[derive(Debug, Clone, Default)]
pub struct ScalarConfig {
    pub case: ScalarCase,
}

impl ScalarConfig {
    /// The legacy upper-cased display configuration.
    pub fn display() -> Self {
        Self {
            case: ScalarCase::Upper,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ScalarCodec {
    config: ScalarConfig,
}

impl ScalarCodec {
    pub fn new(config: ScalarConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScalarConfig {
        &self.config
    }

    /// The quoted literal for `id`.
    pub fn literal<T: CaipIdentifier>(&self, id: &T) -> String {
        let text = match self.config.case {
            ScalarCase::Preserve => id.to_string(),
            ScalarCase::Upper => id.to_string().to_uppercase(),
        };
        Value::String(text).to_string()
    }

    /// Write the quoted literal for `id` to `w`.
    pub fn marshal<T: CaipIdentifier, W: io::Write>(&self, id: &T, mut w: W) -> io::Result<()> {
        w.write_all(self.literal(id).as_bytes())
    }

    /// Decode a scalar input value. Only strings are accepted.
    pub fn unmarshal<T: CaipIdentifier>(&self, input: &Value) -> Result<T> {
        match input {
            Value::String(s) => s.parse(),
            other => {
                let input_kind = value_kind(other);
                tracing::debug!(kind = %T::KIND, input_kind, "rejected non-string scalar input");
                Err(CaipError::UnsupportedInputKind(input_kind))
            }
        }
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
