//! Solidity value types used by generated records and the conversions that present them to
//! the hashing primitive.

use std::fmt::LowerHex;

use crate::errors::{Error, Result};

pub use alloy_primitives::{keccak256, Address, U256};

/// Represents solidity/jsonrpc type H256.
pub type H256 = alloy_primitives::B256;

/// Encode an unsigned integer as a `0x` prefixed hex string without leading zeros.
///
/// Zero is encoded as `0x0`.
pub fn encode_big<T>(value: &T) -> String
where
    T: LowerHex,
{
    format!("0x{:x}", value)
}

/// Inverse of [`encode_big`].
pub fn decode_big(value: &str) -> Result<U256> {
    let digits = value
        .strip_prefix("0x")
        .ok_or_else(|| Error::InvalidHex(value.to_owned(), "missing 0x prefix".to_owned()))?;

    if digits.is_empty() {
        return Err(Error::InvalidHex(value.to_owned(), "empty".to_owned()));
    }

    U256::from_str_radix(digits, 16).map_err(|err| Error::InvalidHex(value.to_owned(), err.to_string()))
}

/// Format `address` as an EIP-55 checksummed hex string.
pub fn checksum(address: &Address) -> String {
    address.to_checksum(None)
}

/// Parse a hex encoded address, mixed case (checksummed) input is accepted.
pub fn parse_address(value: &str) -> Result<Address> {
    value
        .parse()
        .map_err(|err: alloy_primitives::hex::FromHexError| {
            Error::InvalidAddress(value.to_owned(), err.to_string())
        })
}
