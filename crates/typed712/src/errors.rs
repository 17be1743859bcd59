//! Error types and utilities.

/// typed712 runtime error variants.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),

    /// Raised by the EIP-712 hashing primitive, returned to the caller unmodified.
    #[error(transparent)]
    Eip712(#[from] alloy_dyn_abi::Error),

    #[error("invalid hex value `{0}`: {1}")]
    InvalidHex(String, String),

    #[error("invalid address `{0}`: {1}")]
    InvalidAddress(String, String),
}

/// Result type for typed712.
pub type Result<T> = std::result::Result<T, Error>;
