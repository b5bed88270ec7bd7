//! Error types for EVM script handling.

use thiserror::Error;

/// An error raised while parsing or decoding an EVM script.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvmScriptError {
    /// The script ended before a complete record could be read.
    ///
    /// `offset` is the position of the record that could not be read and `length` is the
    /// total length of the script, both in bytes.
    #[error("Invalid EVM script length: record at byte {offset} overruns {length} byte script")]
    InvalidLength {
        /// Offset of the offending record.
        offset: usize,
        /// Total script length.
        length: usize,
    },
    /// The input is not a `0x`-prefixed, even-length hex string.
    #[error("Malformed hex byte string")]
    InvalidHex,
    /// The calldata is not an ABI-encoded `forward(bytes)` call.
    #[error("Calldata is not a forward(bytes) call")]
    InvalidForwardCall,
}
