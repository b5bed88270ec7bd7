//! The omnibus: a numbered list of actions executed by a single vote.

use crate::{Action, GovernanceConfig, OmnibusError};
use alloy_consensus::TxReceipt;
use alloy_primitives::{Bytes, Log};
use alloy_sol_types::{SolCall, sol};
use omnibus_events::{
    EventCheck, EventDescriptor, check_omnibus_events,
    governance::{script_call, script_result, vote_executed_events, vote_started},
};
use omnibus_evm_script::{EvmCall, EvmScript};
use tracing::{debug, info};

sol! {
    /// The Aragon `Voting` entry point for starting a vote.
    interface IVoting {
        /// Starts a vote that runs `_executionScript` once it passes.
        function newVote(bytes _executionScript, string _metadata) external returns (uint256 voteId);
    }
}

/// A governance omnibus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Omnibus {
    /// The omnibus name.
    pub name: String,
    /// The contracts the omnibus is routed through.
    pub config: GovernanceConfig,
    /// The actions, in execution order.
    pub actions: Vec<Action>,
}

impl Omnibus {
    /// Creates an omnibus with no actions.
    pub fn new(name: impl Into<String>, config: GovernanceConfig) -> Self {
        Self { name: name.into(), config, actions: Vec::new() }
    }

    /// Appends an action.
    pub fn with_action(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }

    /// Appends actions.
    pub fn with_actions<I>(mut self, actions: I) -> Self
    where
        I: IntoIterator<Item = Action>,
    {
        self.actions.extend(actions);
        self
    }

    /// Returns the calls the vote makes, in order.
    pub fn calls(&self) -> impl Iterator<Item = &EvmCall> {
        self.actions.iter().map(|action| &action.call)
    }

    /// Returns the vote's execution script.
    pub fn evm_script(&self) -> EvmScript {
        EvmScript::new(self.calls().cloned().collect()).with_spec_id(self.config.spec_id)
    }

    /// Returns the encoded execution script.
    pub fn script(&self) -> Bytes {
        self.evm_script().encode()
    }

    /// Returns the vote description: one numbered line per action.
    pub fn description(&self) -> String {
        self.actions
            .iter()
            .enumerate()
            .map(|(index, action)| format!("{}. {}", index + 1, action.title))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Returns the `Voting.newVote` call that puts the omnibus to a vote.
    pub fn new_vote_call(&self) -> EvmCall {
        let calldata = IVoting::newVoteCall {
            _executionScript: self.script(),
            _metadata: self.description(),
        }
        .abi_encode();
        EvmCall::new(self.config.voting, calldata.into())
    }

    /// Returns the call that starts the vote: [`Self::new_vote_call`] forwarded through the
    /// `TokenManager`.
    pub fn launch_call(&self) -> EvmCall {
        let script = EvmScript::new(vec![self.new_vote_call()]).with_spec_id(self.config.spec_id);
        EvmCall::forward(self.config.token_manager, &script)
    }

    /// Returns the events the [`Self::launch_call`] transaction is expected to emit.
    pub fn launch_events(&self) -> Vec<EventDescriptor> {
        let GovernanceConfig { voting, token_manager, .. } = self.config;
        vec![
            script_call(token_manager, voting),
            vote_started(voting, self.description()),
            script_result(token_manager),
        ]
    }

    /// Verifies the logs of the transaction that started the vote.
    pub fn verify_launch_logs(&self, logs: &[Log]) -> Result<(), OmnibusError> {
        let launch = self.launch_events();
        check_omnibus_events(logs, [launch.as_slice()], &[]).into_result()?;
        info!(target: "omnibus", name = %self.name, "Omnibus vote started");
        Ok(())
    }

    /// Checks that an on-chain vote's execution script makes exactly this omnibus's calls.
    pub fn verify_script(&self, script: &[u8]) -> Result<(), OmnibusError> {
        let decoded = EvmScript::decode(script)?;
        let expected = self.evm_script();

        if decoded.spec_id != expected.spec_id {
            return Err(OmnibusError::ScriptMismatch(0));
        }
        if let Some(index) =
            expected.iter().zip(decoded.iter()).position(|(expected, actual)| expected != actual)
        {
            return Err(OmnibusError::ScriptMismatch(index));
        }
        if decoded.len() != expected.len() {
            return Err(OmnibusError::ScriptMismatch(decoded.len().min(expected.len())));
        }
        Ok(())
    }

    /// Returns the events the vote execution is expected to emit.
    ///
    /// `Voting` runs the execution script itself, so each action's events are preceded by the
    /// `LogScriptCall` for its call, and the vote ends with the vote execution events.
    pub fn expected_events(&self) -> ExpectedEvents {
        let voting = self.config.voting;
        let actions = self
            .actions
            .iter()
            .map(|action| {
                let mut events = Vec::with_capacity(action.expected_events.len() + 1);
                events.push(script_call(voting, action.call.address));
                events.extend(action.expected_events.iter().cloned());
                events
            })
            .collect();

        ExpectedEvents { actions, trailing: vote_executed_events(voting).into() }
    }

    /// Verifies the logs of the vote execution transaction.
    pub fn verify_logs(&self, logs: &[Log]) -> Result<(), OmnibusError> {
        debug!(target: "omnibus", name = %self.name, logs = logs.len(), "Verifying omnibus logs");
        self.expected_events().check(logs).into_result()?;
        info!(target: "omnibus", name = %self.name, actions = self.actions.len(), "Omnibus events verified");
        Ok(())
    }

    /// Verifies the receipt of the vote execution transaction.
    ///
    /// A reverted receipt fails with [`OmnibusError::Reverted`] without looking at its logs.
    pub fn verify_receipt<R>(&self, receipt: &R) -> Result<(), OmnibusError>
    where
        R: TxReceipt<Log = Log>,
    {
        if !receipt.status() {
            return Err(OmnibusError::Reverted);
        }
        self.verify_logs(receipt.logs())
    }
}

/// The events an omnibus execution is expected to emit, grouped per action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpectedEvents {
    /// Each action's events, in action order.
    pub actions: Vec<Vec<EventDescriptor>>,
    /// Events emitted once every action has run.
    pub trailing: Vec<EventDescriptor>,
}

impl ExpectedEvents {
    /// Matches `logs` against the expected events.
    pub fn check<'a>(&'a self, logs: &'a [Log]) -> EventCheck<'a> {
        check_omnibus_events(logs, self.actions.iter().map(Vec::as_slice), &self.trailing)
    }
}
