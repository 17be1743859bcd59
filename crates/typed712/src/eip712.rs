//! Typed structured data envelope, the signing domain and the capability implemented by
//! generated records.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    errors::Result,
    primitives::{keccak256, Address, H256, U256},
};

pub use serde_json::Value;

/// Name of the domain type inside an envelope's `types` table.
pub const EIP712_DOMAIN_NAME: &str = "EIP712Domain";

/// Message of a typed data instance: field name to its presented value.
pub type Message = serde_json::Map<String, Value>;

/// One `(name, type)` entry of a struct type declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeField {
    pub name: String,
    #[serde(rename = "type")]
    pub r#type: String,
}

impl TypeField {
    pub fn new<N: Into<String>, T: Into<String>>(name: N, r#type: T) -> Self {
        Self {
            name: name.into(),
            r#type: r#type.into(),
        }
    }
}

/// The fixed `EIP712Domain` declaration: `name`, `version`, `chainId`, `verifyingContract`.
pub fn eip712_domain_type() -> Vec<TypeField> {
    vec![
        TypeField::new("name", "string"),
        TypeField::new("version", "string"),
        TypeField::new("chainId", "uint256"),
        TypeField::new("verifyingContract", "address"),
    ]
}

/// Signing domain that scopes a signature to one application deployment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Domain {
    pub name: String,
    pub version: String,
    pub chain_id: U256,
    pub verifying_contract: Address,
}

impl Domain {
    pub fn new<N: Into<String>, V: Into<String>>(
        name: N,
        version: V,
        chain_id: U256,
        verifying_contract: Address,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            chain_id,
            verifying_contract,
        }
    }
}

/// Capability set shared by every generated record.
pub trait TypedData {
    /// The declared type name, used as `primaryType`.
    fn name(&self) -> &str;

    /// Ordered field declarations of this type.
    fn r#type(&self) -> Vec<TypeField>;

    /// Field values, converted into the representation the hashing primitive expects.
    fn message(&self) -> Message;

    /// Canonical type string, e.g. `Mail(address from,address to,string contents)`.
    fn encode_type(&self) -> String {
        let fields = self
            .r#type()
            .iter()
            .map(|field| format!("{} {}", field.r#type, field.name))
            .collect::<Vec<_>>()
            .join(",");

        format!("{}({})", self.name(), fields)
    }

    /// Keccak256 hash of [`encode_type`](TypedData::encode_type).
    fn type_hash(&self) -> H256 {
        keccak256(self.encode_type())
    }
}

/// The full typed data request: the domain type plus one struct type, its values and the
/// signing domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypedDataEnvelope {
    pub types: BTreeMap<String, Vec<TypeField>>,
    pub primary_type: String,
    pub domain: Domain,
    pub message: Message,
}

impl TypedDataEnvelope {
    /// Assemble the envelope of `data` bound to `domain`.
    pub fn new<T>(domain: Domain, data: &T) -> Self
    where
        T: TypedData + ?Sized,
    {
        let mut types = BTreeMap::new();

        types.insert(EIP712_DOMAIN_NAME.to_owned(), eip712_domain_type());
        types.insert(data.name().to_owned(), data.r#type());

        Self {
            types,
            primary_type: data.name().to_owned(),
            domain,
            message: data.message(),
        }
    }

    /// Compute `keccak256("\x19\x01" ‖ domainSeparator ‖ hashStruct(message))`.
    ///
    /// The struct hash algorithm is delegated to [`alloy_dyn_abi::TypedData`], its errors are
    /// returned unchanged.
    pub fn hash(&self) -> Result<H256> {
        let typed_data: alloy_dyn_abi::TypedData =
            serde_json::from_value(serde_json::to_value(self)?)?;

        let hash = typed_data.eip712_signing_hash()?;

        log::trace!("eip712 hash, primary_type={}, hash={}", self.primary_type, hash);

        Ok(hash)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    struct Mail {
        contents: String,
    }

    impl TypedData for Mail {
        fn name(&self) -> &str {
            "Mail"
        }

        fn r#type(&self) -> Vec<TypeField> {
            vec![TypeField::new("contents", "string")]
        }

        fn message(&self) -> Message {
            [("contents".to_owned(), Value::from(self.contents.clone()))]
                .into_iter()
                .collect()
        }
    }

    fn domain() -> Domain {
        Domain::new(
            "Ether Mail",
            "1",
            U256::from(1),
            "0xCcCCccccCCCCcCCCCCCcCcCccCcCCCcCcccccccC".parse().unwrap(),
        )
    }

    #[test]
    fn test_encode_type() {
        let mail = Mail {
            contents: "Hello, Bob!".to_owned(),
        };

        assert_eq!(mail.encode_type(), "Mail(string contents)");
        assert_eq!(mail.type_hash(), keccak256("Mail(string contents)"));
    }

    #[test]
    fn test_envelope_shape() {
        let mail = Mail {
            contents: "Hello, Bob!".to_owned(),
        };

        let envelope = TypedDataEnvelope::new(domain(), &mail);

        let mut value = serde_json::to_value(&envelope).unwrap();

        let domain_value = value
            .as_object_mut()
            .unwrap()
            .remove("domain")
            .expect("domain");

        assert_eq!(serde_json::from_value::<Domain>(domain_value).unwrap(), domain());

        assert_eq!(
            value,
            json!({
                "types": {
                    "EIP712Domain": [
                        { "name": "name", "type": "string" },
                        { "name": "version", "type": "string" },
                        { "name": "chainId", "type": "uint256" },
                        { "name": "verifyingContract", "type": "address" },
                    ],
                    "Mail": [
                        { "name": "contents", "type": "string" },
                    ],
                },
                "primaryType": "Mail",
                "message": {
                    "contents": "Hello, Bob!",
                },
            })
        );
    }

    #[test]
    fn test_envelope_hash_is_stable() {
        let mail = Mail {
            contents: "Hello, Bob!".to_owned(),
        };

        let envelope = TypedDataEnvelope::new(domain(), &mail);

        let hash = envelope.hash().unwrap();

        assert_ne!(hash, H256::ZERO);
        assert_eq!(hash, envelope.hash().unwrap());
    }

    #[test]
    fn test_primitive_error_is_returned() {
        let mail = Mail {
            contents: "Hello, Bob!".to_owned(),
        };

        let mut envelope = TypedDataEnvelope::new(domain(), &mail);

        envelope
            .types
            .insert("Mail".to_owned(), vec![TypeField::new("contents", "uint256")]);

        assert!(envelope.hash().is_err());
    }
}
