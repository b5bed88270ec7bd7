//! Expected-event descriptors.

use crate::{ArgDecoder, ArgValue, EventArgs, decode_event_args, decode_raw_args};
use alloc::{borrow::Cow, vec::Vec};
use alloy_primitives::{Address, B256, Log};
use core::fmt;

/// One event a transaction is expected to emit.
///
/// A log matches the descriptor when it was emitted by [`Self::address`], its first topic is
/// [`Self::topic_hash`], and its decoded arguments satisfy every present constraint in
/// [`Self::args`]. An `optional` descriptor may match any number of consecutive logs,
/// including none.
#[derive(Clone)]
pub struct EventDescriptor {
    /// Human readable event name, used when reporting the event as missing.
    pub name: Cow<'static, str>,
    /// The emitting contract.
    pub address: Address,
    /// The event signature hash expected as the log's first topic.
    pub topic_hash: B256,
    /// Positional argument constraints. `None` entries are not checked.
    pub args: Option<Vec<Option<ArgValue>>>,
    /// Whether the event may be emitted zero or more times.
    pub optional: bool,
    decoder: ArgDecoder,
}

impl EventDescriptor {
    /// Creates a descriptor from a raw topic hash.
    ///
    /// Argument constraints on such a descriptor are checked against the log's raw ABI words,
    /// see [`decode_raw_args`].
    pub fn new(name: impl Into<Cow<'static, str>>, address: Address, topic_hash: B256) -> Self {
        Self {
            name: name.into(),
            address,
            topic_hash,
            args: None,
            optional: false,
            decoder: decode_raw_args,
        }
    }

    /// Creates a descriptor for the typed event `E` emitted by `address`.
    pub fn event<E: EventArgs>(address: Address) -> Self {
        Self {
            name: Cow::Borrowed(E::SIGNATURE),
            address,
            topic_hash: E::SIGNATURE_HASH,
            args: None,
            optional: false,
            decoder: decode_event_args::<E>,
        }
    }

    /// Sets the positional argument constraints.
    pub fn with_args<I>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = Option<ArgValue>>,
    {
        self.args = Some(args.into_iter().collect());
        self
    }

    /// Marks the event as optional.
    pub const fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Returns `true` if `log` satisfies this descriptor.
    pub fn matches(&self, log: &Log) -> bool {
        if log.address != self.address || log.topics().first() != Some(&self.topic_hash) {
            return false;
        }
        let Some(constraints) = &self.args else {
            return true;
        };
        let Some(actual) = (self.decoder)(&log.data) else {
            return false;
        };

        constraints.iter().enumerate().all(|(position, constraint)| match constraint {
            Some(expected) => actual.get(position).is_some_and(|actual| expected.matches(actual)),
            None => true,
        })
    }
}

impl fmt::Debug for EventDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventDescriptor")
            .field("name", &self.name)
            .field("address", &self.address)
            .field("topic_hash", &self.topic_hash)
            .field("args", &self.args)
            .field("optional", &self.optional)
            .finish_non_exhaustive()
    }
}

impl PartialEq for EventDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name &&
            self.address == other.address &&
            self.topic_hash == other.topic_hash &&
            self.args == other.args &&
            self.optional == other.optional
    }
}

impl Eq for EventDescriptor {}

impl fmt::Display for EventDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.name, self.address)
    }
}
