//! The EVM script codec.
//!
//! An EVM script is a 4 byte spec id followed by any number of call records. Each record is the
//! 20 byte target address, the big-endian `u32` length of the calldata and the calldata itself.
//! Records are self-delimiting, so the script carries no total length header.

use crate::{EvmScriptError, hex::parse_hex_bytes};
use alloc::vec::Vec;
use alloy_primitives::{Address, Bytes, FixedBytes, fixed_bytes, hex};
use core::fmt;
use tracing::trace;

/// The 4 byte format marker at the start of every EVM script.
pub type SpecId = FixedBytes<4>;

/// Length of the spec id prefix, in bytes.
pub const SPEC_ID_LENGTH: usize = 4;

/// Length of a call record's target address, in bytes.
pub const ADDRESS_LENGTH: usize = 20;

/// Length of a call record's calldata length field, in bytes.
pub const CALLDATA_LENGTH_FIELD: usize = 4;

/// The spec id of the `CallsScript` executor.
pub const DEFAULT_SPEC_ID: SpecId = fixed_bytes!("00000001");

/// A single contract call within an EVM script.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvmCall {
    /// The call target.
    pub address: Address,
    /// The ABI-encoded call payload.
    pub calldata: Bytes,
}

impl EvmCall {
    /// Creates a new [`EvmCall`].
    pub const fn new(address: Address, calldata: Bytes) -> Self {
        Self { address, calldata }
    }

    /// Returns the length of this call's record within an encoded script.
    pub fn encoded_len(&self) -> usize {
        ADDRESS_LENGTH + CALLDATA_LENGTH_FIELD + self.calldata.len()
    }

    /// Appends this call's record to `out`.
    ///
    /// The calldata length is written as its low 32 bits; calldata longer than `u32::MAX` bytes
    /// is not representable in the format and is not checked for.
    fn encode_into(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(self.address.as_slice());
        out.extend_from_slice(&(self.calldata.len() as u32).to_be_bytes());
        out.extend_from_slice(&self.calldata);
    }
}

/// A decoded EVM script: its spec id and the ordered list of calls it carries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct EvmScript {
    /// The format marker.
    pub spec_id: SpecId,
    /// The calls, in execution order.
    pub calls: Vec<EvmCall>,
}

impl Default for EvmScript {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl EvmScript {
    /// Creates a script carrying `calls` under the [`DEFAULT_SPEC_ID`].
    pub const fn new(calls: Vec<EvmCall>) -> Self {
        Self { spec_id: DEFAULT_SPEC_ID, calls }
    }

    /// Replaces the spec id.
    pub const fn with_spec_id(mut self, spec_id: SpecId) -> Self {
        self.spec_id = spec_id;
        self
    }

    /// Returns the number of calls.
    pub fn len(&self) -> usize {
        self.calls.len()
    }

    /// Returns `true` if the script carries no calls.
    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    /// Returns an iterator over the calls.
    pub fn iter(&self) -> core::slice::Iter<'_, EvmCall> {
        self.calls.iter()
    }

    /// Returns the length of the encoded script, in bytes.
    pub fn encoded_len(&self) -> usize {
        SPEC_ID_LENGTH + self.calls.iter().map(EvmCall::encoded_len).sum::<usize>()
    }

    /// Encodes the script.
    pub fn encode(&self) -> Bytes {
        encode(&self.calls, self.spec_id)
    }

    /// Decodes a script from its raw bytes.
    pub fn decode(script: &[u8]) -> Result<Self, EvmScriptError> {
        decode(script)
    }

    /// Decodes a script from a `0x`-prefixed hex string.
    pub fn decode_hex(script: &str) -> Result<Self, EvmScriptError> {
        decode(&parse_hex_bytes(script)?)
    }
}

impl From<Vec<EvmCall>> for EvmScript {
    fn from(calls: Vec<EvmCall>) -> Self {
        Self::new(calls)
    }
}

impl<'a> IntoIterator for &'a EvmScript {
    type Item = &'a EvmCall;
    type IntoIter = core::slice::Iter<'a, EvmCall>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for EvmScript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode_prefixed(self.encode()))
    }
}

/// Returns `true` if `value` is a well-formed hex byte string starting with `spec_id`.
pub fn is_valid_evm_script(value: &str, spec_id: SpecId) -> bool {
    parse_hex_bytes(value).is_ok_and(|bytes| bytes.starts_with(spec_id.as_slice()))
}

/// Encodes `calls`, in order, into an EVM script prefixed with `spec_id`.
pub fn encode(calls: &[EvmCall], spec_id: SpecId) -> Bytes {
    let len = SPEC_ID_LENGTH + calls.iter().map(EvmCall::encoded_len).sum::<usize>();
    let mut out = Vec::with_capacity(len);
    out.extend_from_slice(spec_id.as_slice());
    for call in calls {
        call.encode_into(&mut out);
    }

    trace!(target: "evm_script", %spec_id, calls = calls.len(), len, "Encoded EVM script");
    out.into()
}

/// Decodes an EVM script.
///
/// Fails with [`EvmScriptError::InvalidLength`] if the script is shorter than its spec id or if
/// any call record runs past the end of the script. Trailing bytes that do not form a complete
/// record are rejected the same way.
pub fn decode(script: &[u8]) -> Result<EvmScript, EvmScriptError> {
    let (spec_id, mut rest) = script
        .split_first_chunk::<SPEC_ID_LENGTH>()
        .ok_or(EvmScriptError::InvalidLength { offset: 0, length: script.len() })?;

    let mut calls = Vec::new();
    while !rest.is_empty() {
        let invalid =
            EvmScriptError::InvalidLength { offset: script.len() - rest.len(), length: script.len() };

        let (address, tail) = rest.split_first_chunk::<ADDRESS_LENGTH>().ok_or(invalid)?;
        let (calldata_len, tail) =
            tail.split_first_chunk::<CALLDATA_LENGTH_FIELD>().ok_or(invalid)?;
        let (calldata, tail) =
            tail.split_at_checked(u32::from_be_bytes(*calldata_len) as usize).ok_or(invalid)?;

        calls.push(EvmCall::new(Address::from(*address), Bytes::copy_from_slice(calldata)));
        rest = tail;
    }

    let spec_id = SpecId::from(*spec_id);
    trace!(target: "evm_script", %spec_id, calls = calls.len(), "Decoded EVM script");
    Ok(EvmScript { spec_id, calls })
}
