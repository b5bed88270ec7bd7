#![doc = include_str!("../README.md")]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod args;
pub use args::{ArgDecoder, ArgValue, EventArgs, decode_event_args, decode_raw_args};

mod descriptor;
pub use descriptor::EventDescriptor;

mod matcher;
pub use matcher::{SequenceMatch, match_sequence};

mod check;
pub use check::{EventCheck, EventMismatch, MissingEvent, UnexpectedLog, check_omnibus_events};

pub mod governance;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
