//! Calls routed through an Aragon forwarder.

use crate::{EvmCall, EvmScript, EvmScriptError};
use alloy_primitives::{Address, Bytes};
use alloy_sol_types::{SolCall, sol};

sol! {
    /// The Aragon forwarder interface, implemented by `Agent`, `TokenManager` and `Voting`.
    interface IForwarder {
        /// Executes the calls in `_evmScript` on behalf of the forwarder.
        function forward(bytes _evmScript) external;
    }
}

/// ABI-encodes a `forward(bytes)` call carrying `script`.
pub fn forward_calldata(script: &EvmScript) -> Bytes {
    IForwarder::forwardCall { _evmScript: script.encode() }.abi_encode().into()
}

/// Decodes the EVM script carried by `forward(bytes)` calldata.
pub fn decode_forward(calldata: &[u8]) -> Result<EvmScript, EvmScriptError> {
    let call =
        IForwarder::forwardCall::abi_decode(calldata).map_err(|_| EvmScriptError::InvalidForwardCall)?;
    EvmScript::decode(&call._evmScript)
}

impl EvmCall {
    /// Wraps `script` into a single `forward(bytes)` call to `forwarder`.
    pub fn forward(forwarder: Address, script: &EvmScript) -> Self {
        Self::new(forwarder, forward_calldata(script))
    }
}
