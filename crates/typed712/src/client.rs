//! Client that hashes any [`TypedData`] against a fixed signing domain.

use crate::{
    eip712::{Domain, TypedData, TypedDataEnvelope},
    errors::Result,
    primitives::H256,
};

/// Holds a signing [`Domain`] and hashes typed data instances with it.
///
/// The client is immutable after construction and may be shared between threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Client {
    domain: Domain,
}

impl Client {
    /// Create a client bound to `domain`.
    pub fn new(domain: Domain) -> Self {
        Self { domain }
    }

    /// Returns the signing domain.
    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    /// Assemble the typed data envelope of `data` without hashing it.
    pub fn display<T>(&self, data: &T) -> TypedDataEnvelope
    where
        T: TypedData + ?Sized,
    {
        TypedDataEnvelope::new(self.domain.clone(), data)
    }

    /// Compute the EIP-712 digest of `data`.
    pub fn hash<T>(&self, data: &T) -> Result<H256>
    where
        T: TypedData + ?Sized,
    {
        self.display(data).hash()
    }
}

impl From<Domain> for Client {
    fn from(value: Domain) -> Self {
        Self::new(value)
    }
}
