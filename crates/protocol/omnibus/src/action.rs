//! Omnibus actions.

use alloy_primitives::Address;
use omnibus_events::{
    EventDescriptor,
    governance::{script_call, script_result},
};
use omnibus_evm_script::{EvmCall, EvmScript};

/// One numbered item of an omnibus: a call and the events it is expected to emit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    /// Human readable description, listed in the vote's metadata.
    pub title: String,
    /// The call the vote makes.
    pub call: EvmCall,
    /// The events the call emits, in order.
    pub expected_events: Vec<EventDescriptor>,
}

impl Action {
    /// Creates an action that expects no events.
    pub fn new(title: impl Into<String>, call: EvmCall) -> Self {
        Self { title: title.into(), call, expected_events: Vec::new() }
    }

    /// Creates an action that routes `call` through `forwarder`'s `forward(bytes)`.
    ///
    /// The forwarder runs the call as a one-call EVM script, so `events` are expected between
    /// the forwarder's [`omnibus_events::governance::LogScriptCall`] and
    /// [`omnibus_events::governance::ScriptResult`].
    pub fn forwarded<I>(title: impl Into<String>, forwarder: Address, call: EvmCall, events: I) -> Self
    where
        I: IntoIterator<Item = EventDescriptor>,
    {
        let target = call.address;
        let forward = EvmCall::forward(forwarder, &EvmScript::new(vec![call]));

        Self::new(title, forward)
            .with_event(script_call(forwarder, target))
            .with_events(events)
            .with_event(script_result(forwarder))
    }

    /// Appends an expected event.
    pub fn with_event(mut self, event: EventDescriptor) -> Self {
        self.expected_events.push(event);
        self
    }

    /// Appends expected events.
    pub fn with_events<I>(mut self, events: I) -> Self
    where
        I: IntoIterator<Item = EventDescriptor>,
    {
        self.expected_events.extend(events);
        self
    }
}
