//! Binary wire bridge.
//!
//! Identifiers travel as a single string field of a wire message. There is
//! no dedicated binary packing: [`encode_cbor`] writes the canonical form as
//! one CBOR text string (major type 3).

use crate::error::{CaipError, Result};
use crate::identifier::CaipIdentifier;

/// Value for the message's string field.
pub fn to_wire<T: CaipIdentifier>(id: &T) -> String {
    id.to_string()
}

/// Parse the message's string field.
pub fn from_wire<T: CaipIdentifier>(field: &str) -> Result<T> {
    field.parse()
}

pub fn encode_cbor<T: CaipIdentifier>(id: &T) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    ciborium::into_writer(&to_wire(id), &mut buf)
        .map_err(|e| CaipError::Encoding(e.to_string()))?;
    Ok(buf)
}

/// Decode a CBOR text string, then parse it. Grammar errors keep their type.
pub fn decode_cbor<T: CaipIdentifier>(bytes: &[u8]) -> Result<T> {
    let field: String =
        ciborium::from_reader(bytes).map_err(|e| CaipError::Decoding(e.to_string()))?;
    from_wire(&field)
}
