#![doc = include_str!("../README.md")]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod errors;
pub use errors::EvmScriptError;

pub mod hex;
pub use hex::{hex_eq, is_hex_bytes, normalize_hex, parse_hex_bytes};

mod script;
pub use script::{
    ADDRESS_LENGTH, CALLDATA_LENGTH_FIELD, DEFAULT_SPEC_ID, EvmCall, EvmScript, SPEC_ID_LENGTH,
    SpecId, decode, encode, is_valid_evm_script,
};

mod forward;
pub use forward::{IForwarder, decode_forward, forward_calldata};
