//! Decoded event arguments.

use alloc::{string::String, vec::Vec};
use alloy_primitives::{Address, B256, Bytes, I256, LogData, U256};
use alloy_sol_types::SolEvent;
use derive_more::From;

/// A decoded event argument, or the expected value of one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, From)]
pub enum ArgValue {
    /// An `address`.
    Address(Address),
    /// Any `uintN`.
    Uint(U256),
    /// Any `intN`.
    Int(I256),
    /// A `bool`.
    Bool(bool),
    /// A raw 32 byte ABI word, such as a `bytes32` or an undecoded argument.
    Word(B256),
    /// A dynamic `bytes` value.
    Bytes(Bytes),
    /// A `string`.
    String(String),
}

impl From<u64> for ArgValue {
    fn from(value: u64) -> Self {
        Self::Uint(U256::from(value))
    }
}

impl From<&str> for ArgValue {
    fn from(value: &str) -> Self {
        Self::String(value.into())
    }
}

impl ArgValue {
    /// Returns `true` if the decoded argument `actual` satisfies this expected value.
    ///
    /// Static values compare by their ABI word, so the variant does not have to follow the
    /// event's ABI type: an expected `Uint(42)` matches an `int256` argument decoding to
    /// `Int(42)`, and an expected address matches the raw word of an undecoded argument.
    /// Dynamic values compare by value.
    pub fn matches(&self, actual: &Self) -> bool {
        match (self.as_word(), actual.as_word()) {
            (Some(expected), Some(actual)) => expected == actual,
            _ => self == actual,
        }
    }

    /// Returns the 32 byte ABI encoding of a static value.
    pub fn as_word(&self) -> Option<B256> {
        match self {
            Self::Address(address) => Some(address.into_word()),
            Self::Uint(value) => Some(B256::from(value.to_be_bytes::<32>())),
            Self::Int(value) => Some(B256::from(value.into_raw().to_be_bytes::<32>())),
            Self::Bool(value) => Some(B256::with_last_byte(*value as u8)),
            Self::Word(word) => Some(*word),
            Self::Bytes(_) | Self::String(_) => None,
        }
    }
}

/// A [`SolEvent`] whose decoded fields can be listed as [`ArgValue`]s.
pub trait EventArgs: SolEvent {
    /// Returns the event's arguments in declaration order.
    fn args(&self) -> Vec<ArgValue>;
}

/// Decodes the arguments of a log's payload.
///
/// Returns `None` if the payload cannot be decoded.
pub type ArgDecoder = fn(&LogData) -> Option<Vec<ArgValue>>;

/// Decodes a log as the typed event `E`.
pub fn decode_event_args<E: EventArgs>(log: &LogData) -> Option<Vec<ArgValue>> {
    E::decode_log_data(log).ok().map(|event| event.args())
}

/// Decodes a log without an ABI: the indexed topics after the first, followed by the data
/// split into 32 byte words.
///
/// Returns `None` if the data is not a whole number of words.
pub fn decode_raw_args(log: &LogData) -> Option<Vec<ArgValue>> {
    if !log.data.len().is_multiple_of(32) {
        return None;
    }
    let topics = log.topics().iter().skip(1).copied();
    let words = log.data.chunks_exact(32).map(B256::from_slice);
    Some(topics.chain(words).map(ArgValue::Word).collect())
}
