//! Addresses of the DAO contracts an omnibus is routed through.

use crate::ConfigError;
use alloy_primitives::Address;
use omnibus_evm_script::{DEFAULT_SPEC_ID, SpecId};
use serde::{Deserialize, Serialize};

/// The governance contracts of a DAO.
///
/// Loaded from TOML:
///
/// ```toml
/// voting = "0x2e59A20f205bB85a89C53f1936454680651E618e"
/// agent = "0x3e40D73EB977Dc6a537aF587D48316feE66E9C8c"
/// tokenManager = "0xf73a1260d222f447210581DDf212D915c09a3249"
/// specId = "0x00000001" # optional
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GovernanceConfig {
    /// The `Voting` contract that executes omnibuses.
    pub voting: Address,
    /// The `Agent` holding the DAO's permissions and funds.
    pub agent: Address,
    /// The `TokenManager` through which votes are started.
    pub token_manager: Address,
    /// The spec id of the vote's EVM script.
    #[serde(default = "default_spec_id")]
    pub spec_id: SpecId,
}

const fn default_spec_id() -> SpecId {
    DEFAULT_SPEC_ID
}

impl GovernanceConfig {
    /// Creates a config using the [`DEFAULT_SPEC_ID`].
    pub const fn new(voting: Address, agent: Address, token_manager: Address) -> Self {
        Self { voting, agent, token_manager, spec_id: DEFAULT_SPEC_ID }
    }

    /// Replaces the spec id.
    pub const fn with_spec_id(mut self, spec_id: SpecId) -> Self {
        self.spec_id = spec_id;
        self
    }

    /// Parses a config from a TOML document.
    pub fn from_toml(document: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(document)?)
    }
}
