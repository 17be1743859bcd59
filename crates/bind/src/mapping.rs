//! The mapping between EIP-712 field types and the target language.
//!
//! Each supported type tag resolves to a storage type, used as the record member type, and a
//! [`Conversion`] that presents a stored value to the hashing primitive.

use std::{collections::HashMap, fs, path::Path, sync::OnceLock};

use serde::{Deserialize, Serialize};

use crate::{
    errors::{BindError, Result},
    typedef::{Field, TypeDeclaration},
};

/// Placeholder in storage types replaced with the runtime crate path.
pub const RUNTIME_PLACEHOLDER: &str = "$rt";

/// How a stored value is presented in a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Conversion {
    /// `0x` prefixed hex string without leading zeros.
    Hex,
    /// Base 10 string.
    Decimal,
    /// EIP-55 checksummed address string.
    Checksum,
    /// The value itself.
    Identity,
    /// Array widened into a sequence of dynamic values.
    Widen,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryEntry {
    /// Storage type, may contain [`RUNTIME_PLACEHOLDER`].
    pub storage: String,
    pub conversion: Conversion,
}

impl RegistryEntry {
    pub fn new<S: Into<String>>(storage: S, conversion: Conversion) -> Self {
        Self {
            storage: storage.into(),
            conversion,
        }
    }

    /// Returns the storage type with the runtime placeholder replaced by `runtime`.
    pub fn storage_type(&self, runtime: &str) -> String {
        self.storage.replace(RUNTIME_PLACEHOLDER, runtime)
    }
}

const BUILTIN: &[(&str, &str, Conversion)] = &[
    ("uint8", "u8", Conversion::Decimal),
    ("uint16", "u16", Conversion::Decimal),
    ("uint32", "u32", Conversion::Decimal),
    ("uint64", "u64", Conversion::Decimal),
    ("uint128", "u128", Conversion::Decimal),
    ("uint256", "$rt::U256", Conversion::Hex),
    ("address", "$rt::Address", Conversion::Checksum),
    ("bool", "bool", Conversion::Identity),
    ("string", "::std::string::String", Conversion::Identity),
    (
        "string[]",
        "::std::vec::Vec<::std::string::String>",
        Conversion::Widen,
    ),
];

/// Lookup table from type tag to [`RegistryEntry`].
///
/// Can be read from any [`serde`] compatible format:
///
/// ```json
/// { "uint256": { "storage": "$rt::U256", "conversion": "hex" } }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeRegistry {
    entries: HashMap<String, RegistryEntry>,
}

impl Default for TypeRegistry {
    fn default() -> Self {
        BUILTIN
            .iter()
            .map(|(tag, storage, conversion)| {
                (tag.to_string(), RegistryEntry::new(*storage, *conversion))
            })
            .collect()
    }
}

impl FromIterator<(String, RegistryEntry)> for TypeRegistry {
    fn from_iter<T: IntoIterator<Item = (String, RegistryEntry)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl TypeRegistry {
    /// The builtin registry, initialized once and shared by the whole process.
    pub fn builtin() -> &'static TypeRegistry {
        static BUILTIN_REGISTRY: OnceLock<TypeRegistry> = OnceLock::new();

        BUILTIN_REGISTRY.get_or_init(TypeRegistry::default)
    }

    /// Parse a registry from json mapping data.
    pub fn from_slice(data: &[u8]) -> Result<Self> {
        serde_json::from_slice(data).map_err(|err| BindError::MalformedMapping(err.to_string()))
    }

    /// Load a registry from a json mapping file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = fs::read(path.as_ref())?;

        log::debug!("load type mapping: {}", path.as_ref().display());

        Self::from_slice(&data)
    }

    /// Returns the entry of `tag`.
    pub fn resolve(&self, tag: &str) -> Result<&RegistryEntry> {
        self.entries
            .get(tag)
            .ok_or_else(|| BindError::UnsupportedType {
                tag: tag.to_owned(),
                field: None,
            })
    }

    /// Like [`resolve`](Self::resolve), the error names the field.
    pub fn resolve_field(
        &self,
        declaration: &TypeDeclaration,
        field: &Field,
    ) -> Result<&RegistryEntry> {
        self.entries
            .get(&field.r#type)
            .ok_or_else(|| BindError::UnsupportedType {
                tag: field.r#type.clone(),
                field: Some(format!("{}.{}", declaration.name, field.name)),
            })
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.entries.contains_key(tag)
    }

    /// Registered tags, in no particular order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin() {
        let registry = TypeRegistry::builtin();

        let entry = registry.resolve("uint256").unwrap();

        assert_eq!(entry.conversion, Conversion::Hex);
        assert_eq!(entry.storage_type("typed712"), "typed712::U256");

        assert_eq!(
            registry.resolve("address").unwrap().conversion,
            Conversion::Checksum
        );
        assert_eq!(
            registry.resolve("string").unwrap().conversion,
            Conversion::Identity
        );
        assert_eq!(
            registry.resolve("string[]").unwrap().conversion,
            Conversion::Widen
        );

        assert!(std::ptr::eq(registry, TypeRegistry::builtin()));
    }

    #[test]
    fn test_unsupported() {
        let err = TypeRegistry::builtin().resolve("bytes32").unwrap_err();

        assert!(matches!(err, BindError::UnsupportedType { ref tag, field: None } if tag == "bytes32"));
    }

    #[test]
    fn test_from_slice() {
        let registry = TypeRegistry::from_slice(
            br#"{
                "uint256": { "storage": "$rt::U256", "conversion": "decimal" },
                "bytes32": { "storage": "[u8; 32]", "conversion": "identity" }
            }"#,
        )
        .unwrap();

        assert_eq!(
            registry.resolve("uint256").unwrap(),
            &RegistryEntry::new("$rt::U256", Conversion::Decimal)
        );
        assert!(registry.contains("bytes32"));
        assert!(!registry.contains("address"));
        assert_eq!(registry.tags().count(), 2);
    }

    #[test]
    fn test_from_slice_malformed() {
        let err = TypeRegistry::from_slice(
            br#"{ "uint256": { "storage": "u64", "conversion": "base64" } }"#,
        )
        .unwrap_err();

        assert!(matches!(err, BindError::MalformedMapping(_)));
    }
}
