//! Code generator turning an EIP-712 type schema into strongly typed rust records.
//!
//! The schema is a json object mapping each type name to its ordered field list:
//!
//! ```json
//! { "Ping": [{ "name": "value", "type": "uint256" }] }
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod binder;
pub mod errors;
pub mod mapping;
pub mod typedef;

#[cfg(feature = "rustgen")]
#[cfg_attr(docsrs, doc(cfg(feature = "rustgen")))]
pub mod rustgen;

pub use errors::{BindError, Result};
