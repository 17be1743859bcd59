//! Registry signing messages.
//!
//! [`eip712_types`] is the committed output of
//! `eip712-types-generator --out-dir demos/registry/src --filepath demos/registry/types/eip712_types.json`,
//! [`compiled`] is expanded from the same schema at compile time.

pub mod eip712_types;

typed712::typed_data!(compiled, "types/eip712_types.json");
