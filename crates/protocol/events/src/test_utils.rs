//! Test utilities for building logs and descriptors.

use crate::{ArgValue, EventArgs};
use alloc::{vec, vec::Vec};
use alloy_primitives::{Address, B256, Bytes, Log};
use alloy_sol_types::{SolEvent, sol};

sol! {
    /// A minimal event with one static and one dynamic argument.
    #[derive(Debug, PartialEq, Eq)]
    event Transfer(uint256 amount, string memo);
}

impl EventArgs for Transfer {
    fn args(&self) -> Vec<ArgValue> {
        vec![self.amount.into(), self.memo.clone().into()]
    }
}

/// Builds a log emitted by `address` with `topic` as its only topic and no data.
pub fn raw_log(address: Address, topic: B256) -> Log {
    Log::new_unchecked(address, vec![topic], Bytes::new())
}

/// Builds the log `address` emits for `event`.
pub fn typed_log<E: SolEvent>(address: Address, event: &E) -> Log {
    Log { address, data: event.encode_log_data() }
}

/// Installs a `tracing` subscriber writing to the test harness output.
///
/// Safe to call from every test; only the first call installs the subscriber.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}
