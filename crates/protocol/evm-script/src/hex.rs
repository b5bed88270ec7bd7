//! Helpers for `0x`-prefixed hex byte strings.
//!
//! Byte strings arriving from contract tooling are textual. Equality between two of them must
//! compare the decoded bytes, never the lexical form, since `0xAB` and `0xab` denote the same
//! byte.

use crate::EvmScriptError;
use alloc::string::String;
use alloy_primitives::{Bytes, hex};

/// Returns `true` if `value` is a `0x`-prefixed string holding an even number of hex digits.
pub fn is_hex_bytes(value: &str) -> bool {
    value.strip_prefix("0x").is_some_and(|digits| {
        digits.len().is_multiple_of(2) && digits.bytes().all(|byte| byte.is_ascii_hexdigit())
    })
}

/// Parses a `0x`-prefixed hex byte string.
pub fn parse_hex_bytes(value: &str) -> Result<Bytes, EvmScriptError> {
    if !is_hex_bytes(value) {
        return Err(EvmScriptError::InvalidHex);
    }
    hex::decode(value).map(Bytes::from).map_err(|_| EvmScriptError::InvalidHex)
}

/// Compares two hex byte strings by their decoded bytes.
///
/// Malformed input never compares equal to anything.
pub fn hex_eq(a: &str, b: &str) -> bool {
    match (parse_hex_bytes(a), parse_hex_bytes(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Returns the canonical lowercase form of a hex byte string.
pub fn normalize_hex(value: &str) -> Result<String, EvmScriptError> {
    parse_hex_bytes(value).map(hex::encode_prefixed)
}
