//! Events emitted by the Aragon governance contracts while a vote is started and executed.
//!
//! Executing a vote runs its EVM script through the `CallsScript` executor, which emits
//! [`LogScriptCall`] before every call. Once the script has run, `Voting` emits
//! [`ScriptResult`] followed by [`ExecuteVote`]. Forwarders such as `Agent` go through the same
//! executor, so a forwarded call produces its own [`LogScriptCall`] and [`ScriptResult`] pair.
//! Starting a vote is such a call: the `TokenManager` forwards `newVote` to `Voting`, which emits
//! [`StartVote`] in between.

use crate::{ArgValue, EventArgs, EventDescriptor};
use alloc::{string::String, vec, vec::Vec};
use alloy_primitives::Address;
use alloy_sol_types::sol;

sol! {
    /// Emitted by `Voting` once a vote has been executed.
    #[derive(Debug, PartialEq, Eq)]
    event ExecuteVote(uint256 indexed voteId);

    /// Emitted by `Voting` when a vote is created.
    #[derive(Debug, PartialEq, Eq)]
    event StartVote(uint256 indexed voteId, address indexed creator, string metadata);

    /// Emitted by an EVM script runner after running a script.
    #[derive(Debug, PartialEq, Eq)]
    event ScriptResult(address indexed executor, bytes script, bytes input, bytes returnData);

    /// Emitted by the `CallsScript` executor before each call of a script.
    #[derive(Debug, PartialEq, Eq)]
    event LogScriptCall(address indexed sender, address indexed src, address indexed dst);
}

impl EventArgs for ExecuteVote {
    fn args(&self) -> Vec<ArgValue> {
        vec![self.voteId.into()]
    }
}

impl EventArgs for StartVote {
    fn args(&self) -> Vec<ArgValue> {
        vec![self.voteId.into(), self.creator.into(), self.metadata.clone().into()]
    }
}

impl EventArgs for ScriptResult {
    fn args(&self) -> Vec<ArgValue> {
        vec![
            self.executor.into(),
            self.script.clone().into(),
            self.input.clone().into(),
            self.returnData.clone().into(),
        ]
    }
}

impl EventArgs for LogScriptCall {
    fn args(&self) -> Vec<ArgValue> {
        vec![self.sender.into(), self.src.into(), self.dst.into()]
    }
}

/// The events `Voting` at `voting` emits after running a vote's script, in emission order.
pub fn vote_executed_events(voting: Address) -> [EventDescriptor; 2] {
    [EventDescriptor::event::<ScriptResult>(voting), EventDescriptor::event::<ExecuteVote>(voting)]
}

/// The [`LogScriptCall`] a script running in `runner` emits before calling `target`.
pub fn script_call(runner: Address, target: Address) -> EventDescriptor {
    EventDescriptor::event::<LogScriptCall>(runner).with_args([
        None,
        Some(runner.into()),
        Some(target.into()),
    ])
}

/// The [`StartVote`] `voting` emits when a vote carrying `metadata` is created.
pub fn vote_started(voting: Address, metadata: impl Into<String>) -> EventDescriptor {
    EventDescriptor::event::<StartVote>(voting).with_args([
        None,
        None,
        Some(ArgValue::String(metadata.into())),
    ])
}

/// The [`ScriptResult`] emitted by `runner` once its script has run.
pub fn script_result(runner: Address) -> EventDescriptor {
    EventDescriptor::event::<ScriptResult>(runner)
}
