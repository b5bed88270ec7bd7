//! Error types for omnibus construction and verification.

use omnibus_events::EventMismatch;
use omnibus_evm_script::EvmScriptError;
use thiserror::Error;

/// An error raised while verifying an executed omnibus.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OmnibusError {
    /// The omnibus transaction reverted.
    #[error("Omnibus transaction reverted")]
    Reverted,
    /// The emitted events differ from the expected ones.
    #[error(transparent)]
    Events(#[from] EventMismatch),
    /// An EVM script could not be decoded.
    #[error(transparent)]
    Script(#[from] EvmScriptError),
    /// A vote's execution script differs from the omnibus, starting at the given call.
    #[error("Vote script differs from the omnibus at call {0}")]
    ScriptMismatch(usize),
}

/// An error raised while loading a [`crate::GovernanceConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The TOML document could not be parsed into a config.
    #[error("Failed to parse governance config: {0}")]
    Toml(#[from] toml::de::Error),
}
