#![cfg_attr(docsrs, feature(doc_cfg))]
//! Runtime support for generated EIP-712 typed data bindings.
//!
//! Generated records implement [`TypedData`](eip712::TypedData). A [`Client`](client::Client)
//! binds them to a signing [`Domain`](eip712::Domain) and computes the digest to sign:
//!
//! ```no_run
//! use typed712::prelude::*;
//!
//! struct Ping {
//!     value: U256,
//! }
//!
//! impl TypedData for Ping {
//!     fn name(&self) -> &str {
//!         "Ping"
//!     }
//!
//!     fn r#type(&self) -> Vec<TypeField> {
//!         vec![TypeField::new("value", "uint256")]
//!     }
//!
//!     fn message(&self) -> Message {
//!         [("value".to_owned(), Value::from(encode_big(&self.value)))]
//!             .into_iter()
//!             .collect()
//!     }
//! }
//!
//! let client = Client::new(Domain::new(
//!     "App",
//!     "1",
//!     U256::from(1),
//!     "0x0000000000000000000000000000000000000001".parse().unwrap(),
//! ));
//!
//! let hash = client.hash(&Ping { value: U256::from(5) }).unwrap();
//! ```

pub mod client;
pub mod eip712;
pub mod errors;
pub mod primitives;

#[cfg(feature = "macros")]
#[doc(hidden)]
pub mod macros;

pub use client::Client;
pub use eip712::{
    eip712_domain_type, Domain, Message, TypeField, TypedData, TypedDataEnvelope, Value,
    EIP712_DOMAIN_NAME,
};
pub use errors::{Error, Result};
pub use primitives::*;

#[doc(hidden)]
pub use serde;

/// Reexport runtime types.
pub mod prelude {
    pub use super::client::Client;
    pub use super::eip712::*;
    pub use super::errors::{Error, Result};
    pub use super::primitives::*;
}
