//! Omnibus-wide event verification.

use crate::{EventDescriptor, match_sequence};
use alloc::{string::String, vec::Vec};
use alloy_primitives::{Address, B256, Log};
use core::fmt;
use thiserror::Error;
use tracing::{debug, warn};

/// The outcome of [`check_omnibus_events`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventCheck<'a> {
    /// Expected events that were not found, across all actions and the trailing events.
    pub missing: Vec<&'a EventDescriptor>,
    /// Logs left over once every descriptor has been resolved.
    pub unexpected: &'a [Log],
}

impl EventCheck<'_> {
    /// Returns `true` if every expected event was found and no log was left over.
    pub fn is_ok(&self) -> bool {
        self.missing.is_empty() && self.unexpected.is_empty()
    }

    /// Converts the check into a [`Result`], carrying every defect in the error.
    pub fn into_result(self) -> Result<(), EventMismatch> {
        if self.is_ok() {
            return Ok(());
        }
        Err(EventMismatch {
            missing: self.missing.into_iter().map(MissingEvent::from).collect(),
            unexpected: self.unexpected.iter().map(UnexpectedLog::from).collect(),
        })
    }
}

/// Verifies the logs of an executed omnibus.
///
/// Each action's descriptors are matched against the logs left over by the previous action,
/// and the logs they consume are sliced off. The `trailing` descriptors, usually the vote
/// execution events from [`crate::governance::vote_executed_events`], are then matched against
/// what remains. Any log still left after that is reported as unexpected.
pub fn check_omnibus_events<'a, A>(
    logs: &'a [Log],
    actions: A,
    trailing: &'a [EventDescriptor],
) -> EventCheck<'a>
where
    A: IntoIterator<Item = &'a [EventDescriptor]>,
{
    let mut remaining = logs;
    let mut missing = Vec::new();

    for (index, descriptors) in actions.into_iter().enumerate() {
        let result = match_sequence(remaining, descriptors);
        debug!(
            target: "events",
            action = index + 1,
            consumed = result.consumed,
            missing = result.unmatched.len(),
            "Checked action events"
        );
        remaining = &remaining[result.consumed..];
        missing.extend(result.unmatched);
    }

    let result = match_sequence(remaining, trailing);
    remaining = &remaining[result.consumed..];
    missing.extend(result.unmatched);

    for descriptor in &missing {
        warn!(target: "events", event = %descriptor, "Expected event not found");
    }
    for log in remaining {
        warn!(target: "events", address = %log.address, topic = ?log.topics().first(), "Unexpected log");
    }

    EventCheck { missing, unexpected: remaining }
}

/// An expected event that was not emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingEvent {
    /// The event name.
    pub name: String,
    /// The contract expected to emit it.
    pub address: Address,
}

impl From<&EventDescriptor> for MissingEvent {
    fn from(descriptor: &EventDescriptor) -> Self {
        Self { name: descriptor.name.as_ref().into(), address: descriptor.address }
    }
}

impl fmt::Display for MissingEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.name, self.address)
    }
}

/// A log no descriptor accounted for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnexpectedLog {
    /// The emitting contract.
    pub address: Address,
    /// The log's first topic, if any.
    pub topic: Option<B256>,
}

impl From<&Log> for UnexpectedLog {
    fn from(log: &Log) -> Self {
        Self { address: log.address, topic: log.topics().first().copied() }
    }
}

impl fmt::Display for UnexpectedLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.topic {
            Some(topic) => write!(f, "{topic} @ {}", self.address),
            None => write!(f, "anonymous log @ {}", self.address),
        }
    }
}

/// Every defect found by an [`EventCheck`].
#[derive(Error, Debug, Clone, Default, PartialEq, Eq)]
pub struct EventMismatch {
    /// Expected events that were not found.
    pub missing: Vec<MissingEvent>,
    /// Logs no expected event accounted for.
    pub unexpected: Vec<UnexpectedLog>,
}

impl fmt::Display for EventMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_mismatch(self, f)
    }
}

/// Lists every missing event and unexpected log, one per line.
fn format_mismatch(mismatch: &EventMismatch, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
        f,
        "Event mismatch: {} missing event(s), {} unexpected log(s)",
        mismatch.missing.len(),
        mismatch.unexpected.len()
    )?;
    for event in &mismatch.missing {
        write!(f, "\n  missing: {event}")?;
    }
    for log in &mismatch.unexpected {
        write!(f, "\n  unexpected: {log}")?;
    }
    Ok(())
}
