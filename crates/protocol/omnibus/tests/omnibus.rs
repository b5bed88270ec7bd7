//! End-to-end verification of an executed omnibus.

use alloy_consensus::Receipt;
use alloy_primitives::{Address, Bytes, Log, U256, address, bytes};
use alloy_sol_types::SolCall;
use omnibus_core::{Action, GovernanceConfig, IVoting, Omnibus, OmnibusError};
use omnibus_events::{
    EventDescriptor, MissingEvent,
    governance::{ExecuteVote, LogScriptCall, ScriptResult, StartVote},
    test_utils::{Transfer, init_tracing, typed_log},
};
use omnibus_evm_script::{EvmCall, decode_forward};
use rstest::{fixture, rstest};

const VOTING: Address = address!("0x2e59A20f205bB85a89C53f1936454680651E618e");
const AGENT: Address = address!("0x3e40D73EB977Dc6a537aF587D48316feE66E9C8c");
const TOKEN_MANAGER: Address = address!("0xf73a1260d222f447210581DDf212D915c09a3249");
const TOKEN: Address = address!("0xae7ab96520DE3A18E5e111B5EaAb095312D7fE84");
const REGISTRY: Address = address!("0x0000000000000000000000000000000000001234");

fn transfer(amount: u64) -> EventDescriptor {
    EventDescriptor::event::<Transfer>(TOKEN).with_args([Some(amount.into()), None])
}

fn transfer_log(amount: u64) -> Log {
    typed_log(TOKEN, &Transfer { amount: U256::from(amount), memo: "payout".into() })
}

fn script_call_log(runner: Address, target: Address) -> Log {
    typed_log(runner, &LogScriptCall { sender: VOTING, src: runner, dst: target })
}

fn start_vote_log(metadata: &str) -> Log {
    typed_log(
        VOTING,
        &StartVote { voteId: U256::from(42), creator: AGENT, metadata: metadata.into() },
    )
}

fn script_result_log(runner: Address) -> Log {
    typed_log(
        runner,
        &ScriptResult {
            executor: Address::ZERO,
            script: Bytes::new(),
            input: Bytes::new(),
            returnData: Bytes::new(),
        },
    )
}

#[fixture]
fn omnibus() -> Omnibus {
    init_tracing();
    Omnibus::new("Treasury omnibus", GovernanceConfig::new(VOTING, AGENT, TOKEN_MANAGER))
        .with_action(Action::new("Update registry", EvmCall::new(REGISTRY, bytes!("0x12345678"))))
        .with_action(Action::forwarded(
            "Pay out from the treasury",
            AGENT,
            EvmCall::new(TOKEN, bytes!("0xa9059cbb")),
            [transfer(100), transfer(1).optional()],
        ))
}

fn execution_logs() -> Vec<Log> {
    vec![
        script_call_log(VOTING, REGISTRY),
        script_call_log(VOTING, AGENT),
        script_call_log(AGENT, TOKEN),
        transfer_log(100),
        transfer_log(1),
        transfer_log(1),
        script_result_log(AGENT),
        script_result_log(VOTING),
        typed_log(VOTING, &ExecuteVote { voteId: U256::from(42) }),
    ]
}

#[rstest]
fn test_verify_logs(omnibus: Omnibus) {
    assert_eq!(omnibus.verify_logs(&execution_logs()), Ok(()));
}

#[rstest]
fn test_verify_logs_without_optional_events(omnibus: Omnibus) {
    let logs: Vec<_> = execution_logs()
        .into_iter()
        .filter(|log| *log != transfer_log(1))
        .collect();
    assert_eq!(omnibus.verify_logs(&logs), Ok(()));
}

#[rstest]
fn test_verify_logs_missing_event(omnibus: Omnibus) {
    let mut logs = execution_logs();
    logs.remove(3);

    let Err(OmnibusError::Events(mismatch)) = omnibus.verify_logs(&logs) else {
        panic!("expected an event mismatch");
    };
    assert_eq!(
        mismatch.missing,
        vec![MissingEvent { name: "Transfer(uint256,string)".into(), address: TOKEN }]
    );
}

#[rstest]
fn test_verify_logs_unexpected_log(omnibus: Omnibus) {
    let mut logs = execution_logs();
    logs.push(transfer_log(7));

    let Err(OmnibusError::Events(mismatch)) = omnibus.verify_logs(&logs) else {
        panic!("expected an event mismatch");
    };
    assert!(mismatch.missing.is_empty());
    assert_eq!(mismatch.unexpected.len(), 1);
    assert_eq!(mismatch.unexpected[0].address, TOKEN);
}

#[rstest]
fn test_verify_receipt(omnibus: Omnibus) {
    let receipt = Receipt { status: true.into(), cumulative_gas_used: 21_000, logs: execution_logs() };
    assert_eq!(omnibus.verify_receipt(&receipt), Ok(()));

    let reverted = Receipt { status: false.into(), cumulative_gas_used: 21_000, logs: Vec::<Log>::new() };
    assert_eq!(omnibus.verify_receipt(&reverted), Err(OmnibusError::Reverted));
}

#[rstest]
fn test_launch_call_starts_vote_with_script(omnibus: Omnibus) {
    let launch = omnibus.launch_call();
    assert_eq!(launch.address, TOKEN_MANAGER);

    let forwarded = decode_forward(&launch.calldata).unwrap();
    assert_eq!(forwarded.len(), 1);
    assert_eq!(forwarded.calls[0].address, VOTING);

    let new_vote = IVoting::newVoteCall::abi_decode(&forwarded.calls[0].calldata).unwrap();
    assert_eq!(new_vote._metadata, "1. Update registry\n2. Pay out from the treasury");
    assert_eq!(omnibus.verify_script(&new_vote._executionScript), Ok(()));
}

#[rstest]
fn test_verify_launch_logs(omnibus: Omnibus) {
    let logs = |metadata: &str| {
        vec![
            script_call_log(TOKEN_MANAGER, VOTING),
            start_vote_log(metadata),
            script_result_log(TOKEN_MANAGER),
        ]
    };
    assert_eq!(omnibus.verify_launch_logs(&logs(&omnibus.description())), Ok(()));

    let Err(OmnibusError::Events(mismatch)) = omnibus.verify_launch_logs(&logs("1. Other")) else {
        panic!("expected an event mismatch");
    };
    assert_eq!(
        mismatch.missing,
        vec![MissingEvent { name: "StartVote(uint256,address,string)".into(), address: VOTING }]
    );
}
