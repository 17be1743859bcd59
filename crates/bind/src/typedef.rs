//! The type schema: an ordered list of struct type declarations, each an ordered list of
//! named, typed fields.
//!
//! ```json
//! {
//!     "Ping": [{ "name": "value", "type": "uint256" }],
//!     "Transfer": [
//!         { "name": "to", "type": "address" },
//!         { "name": "amount", "type": "uint256" }
//!     ]
//! }
//! ```
//!
//! Declaration and field order are significant: they define the canonical type string. The
//! schema is read into a [`Vec`] in document order, no map type is involved.

use std::{collections::HashSet, fmt, fs, path::Path, str::FromStr};

use heck::{ToSnekCase, ToUpperCamelCase};
use serde::{
    de::{self, MapAccess, Visitor},
    Deserialize, Deserializer, Serialize,
};

use crate::{
    errors::{BindError, Result},
    mapping::TypeRegistry,
};

/// Name of the implicit domain type, can't be redeclared by a schema.
pub const EIP712_DOMAIN_NAME: &str = "EIP712Domain";

/// A named, typed struct member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub r#type: String,
}

impl Field {
    pub fn new<N: Into<String>, T: Into<String>>(name: N, r#type: T) -> Self {
        Self {
            name: name.into(),
            r#type: r#type.into(),
        }
    }
}

/// A struct type declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDeclaration {
    pub name: String,
    pub fields: Vec<Field>,
}

impl TypeDeclaration {
    pub fn new<N: Into<String>>(name: N, fields: Vec<Field>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    /// Returns the canonical type string, e.g. `Ping(uint256 value)`.
    pub fn signature(&self) -> String {
        let fields = self
            .fields
            .iter()
            .map(|field| format!("{} {}", field.r#type, field.name))
            .collect::<Vec<_>>()
            .join(",");

        format!("{}({})", self.name, fields)
    }
}

/// Loaded and checked type declarations, in schema order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    declarations: Vec<TypeDeclaration>,
}

impl Schema {
    /// Parse json schema data.
    pub fn from_slice(data: &[u8]) -> Result<Self> {
        let raw: RawSchema =
            serde_json::from_slice(data).map_err(|err| BindError::MalformedSchema(err.to_string()))?;

        raw.try_into()
    }

    /// Read and parse a json schema file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        log::debug!("load eip712 types: {}", path.as_ref().display());

        let data = fs::read(path.as_ref())?;

        Self::from_slice(&data)
    }

    /// Check every field tag against `registry`.
    pub fn validate(&self, registry: &TypeRegistry) -> Result<()> {
        for declaration in &self.declarations {
            for field in &declaration.fields {
                registry.resolve_field(declaration, field)?;
            }
        }

        Ok(())
    }

    pub fn declarations(&self) -> &[TypeDeclaration] {
        &self.declarations
    }

    pub fn into_declarations(self) -> Vec<TypeDeclaration> {
        self.declarations
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

impl FromStr for Schema {
    type Err = BindError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::from_slice(s.as_bytes())
    }
}

impl TryFrom<Vec<TypeDeclaration>> for Schema {
    type Error = BindError;

    fn try_from(declarations: Vec<TypeDeclaration>) -> std::result::Result<Self, Self::Error> {
        let mut type_names = HashSet::new();

        for declaration in &declarations {
            check_type_name(&declaration.name)?;

            if !type_names.insert(declaration.name.to_upper_camel_case()) {
                return Err(BindError::MalformedSchema(format!(
                    "duplicate type `{}`",
                    declaration.name
                )));
            }

            let mut field_names = HashSet::new();

            for (index, field) in declaration.fields.iter().enumerate() {
                check_field_name(declaration, index, &field.name)?;

                if !field_names.insert(field.name.to_snek_case()) {
                    return Err(invalid_field(
                        declaration,
                        index,
                        format!("duplicate field `{}`", field.name),
                    ));
                }

                if field.r#type.is_empty() {
                    return Err(invalid_field(declaration, index, "empty type"));
                }
            }
        }

        Ok(Self { declarations })
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();

    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn check_type_name(name: &str) -> Result<()> {
    if !is_identifier(name) {
        return Err(BindError::MalformedSchema(format!(
            "invalid type name `{}`",
            name
        )));
    }

    if name == EIP712_DOMAIN_NAME || name.to_upper_camel_case() == "Self" {
        return Err(BindError::MalformedSchema(format!(
            "reserved type name `{}`",
            name
        )));
    }

    Ok(())
}

fn check_field_name(declaration: &TypeDeclaration, index: usize, name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(invalid_field(declaration, index, "empty name"));
    }

    if !is_identifier(name) {
        return Err(invalid_field(
            declaration,
            index,
            format!("invalid name `{}`", name),
        ));
    }

    if matches!(name.to_snek_case().as_str(), "self" | "super" | "crate") {
        return Err(invalid_field(
            declaration,
            index,
            format!("reserved name `{}`", name),
        ));
    }

    Ok(())
}

fn invalid_field<R: Into<String>>(declaration: &TypeDeclaration, index: usize, reason: R) -> BindError {
    BindError::InvalidField {
        type_name: declaration.name.clone(),
        index,
        reason: reason.into(),
    }
}

/// Field as written in the schema, name and type are checked after parsing.
#[derive(Deserialize)]
struct RawField {
    name: Option<String>,
    #[serde(rename = "type")]
    r#type: Option<String>,
}

struct RawSchema(Vec<(String, Vec<RawField>)>);

struct RawSchemaVisitor;

impl<'de> Visitor<'de> for RawSchemaVisitor {
    type Value = RawSchema;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "expect a mapping from type name to field list")
    }

    fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries: Vec<(String, Vec<RawField>)> = Vec::new();

        while let Some((name, fields)) = map.next_entry::<String, Vec<RawField>>()? {
            if entries.iter().any(|(exists, _)| *exists == name) {
                return Err(de::Error::custom(format!("duplicate type `{}`", name)));
            }

            entries.push((name, fields));
        }

        Ok(RawSchema(entries))
    }
}

impl<'de> Deserialize<'de> for RawSchema {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(RawSchemaVisitor)
    }
}

impl TryFrom<RawSchema> for Schema {
    type Error = BindError;

    fn try_from(raw: RawSchema) -> std::result::Result<Self, Self::Error> {
        let mut declarations = Vec::with_capacity(raw.0.len());

        for (name, raw_fields) in raw.0 {
            let mut declaration = TypeDeclaration::new(name, Vec::with_capacity(raw_fields.len()));

            for (index, raw_field) in raw_fields.into_iter().enumerate() {
                let name = raw_field
                    .name
                    .ok_or_else(|| invalid_field(&declaration, index, "missing name"))?;

                let r#type = raw_field
                    .r#type
                    .ok_or_else(|| invalid_field(&declaration, index, "missing type"))?;

                declaration.fields.push(Field::new(name, r#type));
            }

            log::trace!("declare {}", declaration.signature());

            declarations.push(declaration);
        }

        declarations.try_into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preserve_order() {
        let schema: Schema = r#"{
            "Zeta": [
                { "name": "owner", "type": "address" },
                { "name": "amount", "type": "uint256" },
                { "name": "memo", "type": "string" }
            ],
            "Alpha": [
                { "name": "value", "type": "uint256" }
            ],
            "Mid": []
        }"#
        .parse()
        .unwrap();

        let names = schema
            .declarations()
            .iter()
            .map(|declaration| declaration.name.as_str())
            .collect::<Vec<_>>();

        assert_eq!(names, ["Zeta", "Alpha", "Mid"]);

        assert_eq!(
            schema.declarations()[0].signature(),
            "Zeta(address owner,uint256 amount,string memo)"
        );

        assert_eq!(schema.declarations()[2].signature(), "Mid()");

        schema.validate(TypeRegistry::builtin()).unwrap();
    }

    #[test]
    fn test_missing_name() {
        let err = Schema::from_str(
            r#"{ "Ping": [{ "name": "value", "type": "uint256" }, { "type": "uint256" }] }"#,
        )
        .unwrap_err();

        assert!(
            matches!(err, BindError::InvalidField { ref type_name, index: 1, .. } if type_name == "Ping")
        );
    }

    #[test]
    fn test_empty_name() {
        let err = Schema::from_str(r#"{ "Ping": [{ "name": "", "type": "uint256" }] }"#).unwrap_err();

        assert!(matches!(err, BindError::InvalidField { index: 0, .. }));
    }

    #[test]
    fn test_invalid_names() {
        for name in ["1value", "_value", "val-ue", "self"] {
            let schema = format!(r#"{{ "Ping": [{{ "name": "{}", "type": "uint256" }}] }}"#, name);

            assert!(
                matches!(Schema::from_str(&schema), Err(BindError::InvalidField { .. })),
                "{}",
                name
            );
        }
    }

    #[test]
    fn test_missing_type() {
        let err = Schema::from_str(r#"{ "Ping": [{ "name": "value" }] }"#).unwrap_err();

        assert!(matches!(err, BindError::InvalidField { ref reason, .. } if reason == "missing type"));
    }

    #[test]
    fn test_duplicate_field() {
        let err = Schema::from_str(
            r#"{ "Ping": [
                { "name": "value", "type": "uint256" },
                { "name": "value", "type": "string" }
            ] }"#,
        )
        .unwrap_err();

        assert!(matches!(err, BindError::InvalidField { index: 1, .. }));

        // collide after conversion to rust field names.
        let err = Schema::from_str(
            r#"{ "Ping": [
                { "name": "vehicleNode", "type": "uint256" },
                { "name": "vehicle_node", "type": "uint256" }
            ] }"#,
        )
        .unwrap_err();

        assert!(matches!(err, BindError::InvalidField { index: 1, .. }));
    }

    #[test]
    fn test_malformed() {
        for data in [
            "[]",
            r#"{ "Ping": { "name": "value", "type": "uint256" } }"#,
            r#"{ "Ping": ["value"] }"#,
            r#"{ "Ping": [], "Ping": [] }"#,
            r#"{ "EIP712Domain": [] }"#,
            r#"{ "ping-pong": [] }"#,
            "{",
        ] {
            assert!(
                matches!(Schema::from_str(data), Err(BindError::MalformedSchema(_))),
                "{}",
                data
            );
        }
    }

    #[test]
    fn test_unsupported_type() {
        let schema: Schema = r#"{ "Foo": [{ "name": "x", "type": "bytes32" }] }"#
            .parse()
            .unwrap();

        let err = schema.validate(TypeRegistry::builtin()).unwrap_err();

        assert!(matches!(
            err,
            BindError::UnsupportedType { ref tag, field: Some(ref field) } if tag == "bytes32" && field == "Foo.x"
        ));
    }

    #[test]
    fn test_try_from_declarations() {
        let schema = Schema::try_from(vec![TypeDeclaration::new(
            "Ping",
            vec![Field::new("value", "uint256")],
        )])
        .unwrap();

        assert_eq!(schema.len(), 1);

        assert!(Schema::try_from(vec![
            TypeDeclaration::new("Ping", vec![]),
            TypeDeclaration::new("ping", vec![]),
        ])
        .is_err());
    }
}
