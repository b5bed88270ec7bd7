#![doc = include_str!("../README.md")]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

mod errors;
pub use errors::{ConfigError, OmnibusError};

mod config;
pub use config::GovernanceConfig;

mod action;
pub use action::Action;

mod omnibus;
pub use omnibus::{ExpectedEvents, IVoting, Omnibus};
