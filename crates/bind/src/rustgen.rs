//! This module provides the official [`binder`](crate::binder::Binder) implementation for rust code.
//!
//! Every declared type becomes a record implementing the runtime's `TypedData` trait, plus a
//! `typed_data_and_hash` routine that hashes the record without a `Client`.

use std::{
    cell::RefCell,
    ffi::OsString,
    fs, io,
    path::{Path, PathBuf},
    rc::Rc,
};

use heck::{ToSnekCase, ToUpperCamelCase};
use proc_macro2::{Ident, LexError, TokenStream};
use quote::quote;

use crate::{
    binder::{bind, Binder, BinderContext, PackageBinder, StructBinder},
    errors::{BindError, Result},
    mapping::{Conversion, RegistryEntry, TypeRegistry},
    typedef::{Field, Schema, TypeDeclaration, EIP712_DOMAIN_NAME},
};

/// Path of the runtime crate referenced by generated code.
pub const DEFAULT_RUNTIME: &str = "typed712";

/// The code generator for rust language.
pub struct RustBinder {
    runtime: String,
}

impl Default for RustBinder {
    fn default() -> Self {
        Self::new(DEFAULT_RUNTIME)
    }
}

impl RustBinder {
    /// Create new `RustBinder`, generated code refers to the runtime crate through `runtime`.
    pub fn new<R: Into<String>>(runtime: R) -> Self {
        Self {
            runtime: runtime.into(),
        }
    }
}

impl Binder for RustBinder {
    type Error = BindError;
    type PackageBinder = RustPackageBinder;

    fn prepare(
        &mut self,
        _cx: &BinderContext<'_>,
        package: &str,
    ) -> Result<Self::PackageBinder> {
        check_package(package)?;

        RustPackageBinder::new(&self.runtime)
    }
}

struct RustPackageBinderContext {
    runtime: String,
    rt: TokenStream,
    structs: Vec<TokenStream>,
    widen: bool,
}

/// Generator of one package (one output unit).
pub struct RustPackageBinder {
    context: Rc<RefCell<RustPackageBinderContext>>,
}

impl RustPackageBinder {
    fn new(runtime: &str) -> Result<Self> {
        let rt = parse_tokens(runtime)?;

        Ok(Self {
            context: Rc::new(RefCell::new(RustPackageBinderContext {
                runtime: runtime.to_owned(),
                rt,
                structs: Default::default(),
                widen: false,
            })),
        })
    }
}

impl PackageBinder for RustPackageBinder {
    type Error = BindError;
    type StructBinder = RustStructBinder;

    fn bind_struct(
        &mut self,
        _cx: &BinderContext<'_>,
        declaration: &TypeDeclaration,
    ) -> Result<Self::StructBinder> {
        Ok(RustStructBinder::new(declaration, self.context.clone()))
    }

    fn finalize(&mut self, _cx: &BinderContext<'_>) -> Result<TokenStream> {
        let mut context = self.context.borrow_mut();

        let rt = context.rt.clone();

        let structs = context.structs.drain(..).collect::<Vec<_>>();

        let helper = if context.widen {
            quote! {
                /// Widen a homogeneous slice into a sequence of dynamic values.
                fn any_slice<T>(values: &[T]) -> #rt::Value
                where
                    T: ::core::clone::Clone + ::core::convert::Into<#rt::Value>,
                {
                    #rt::Value::Array(
                        values
                            .iter()
                            .cloned()
                            .map(::core::convert::Into::into)
                            .collect(),
                    )
                }
            }
        } else {
            quote! {}
        };

        Ok(quote! {
            #(#structs)*

            #helper
        })
    }
}

/// Generator of one record.
pub struct RustStructBinder {
    type_name: String,
    signature: String,
    context: Rc<RefCell<RustPackageBinderContext>>,
    field_list: Vec<TokenStream>,
    type_list: Vec<TokenStream>,
    message_list: Vec<TokenStream>,
}

impl RustStructBinder {
    fn new(declaration: &TypeDeclaration, context: Rc<RefCell<RustPackageBinderContext>>) -> Self {
        Self {
            type_name: declaration.name.clone(),
            signature: declaration.signature(),
            context,
            field_list: Default::default(),
            type_list: Default::default(),
            message_list: Default::default(),
        }
    }
}

impl StructBinder for RustStructBinder {
    type Error = BindError;

    fn bind_field(
        &mut self,
        _cx: &BinderContext<'_>,
        _index: usize,
        field: &Field,
        entry: &RegistryEntry,
    ) -> Result<()> {
        let mut context = self.context.borrow_mut();

        let rt = context.rt.clone();

        let storage = parse_tokens(&entry.storage_type(&context.runtime))?;

        let field_ident = to_field_ident(&field.name)?;

        let name = &field.name;

        let tag = &field.r#type;

        self.field_list.push(quote! {
            #[serde(rename = #name)]
            pub #field_ident: #storage
        });

        self.type_list.push(quote! {
            #rt::TypeField::new(#name, #tag)
        });

        let value = conversion_expr(&rt, entry.conversion, quote!(self.#field_ident));

        if entry.conversion == Conversion::Widen {
            context.widen = true;
        }

        self.message_list.push(quote! {
            (#name.to_owned(), #value)
        });

        Ok(())
    }

    fn finalize(&mut self, _cx: &BinderContext<'_>) -> Result<()> {
        let mut context = self.context.borrow_mut();

        let rt = context.rt.clone();

        let serde_crate = format!("{}::serde", context.runtime);

        let struct_ident = to_ident(&self.type_name.to_upper_camel_case())?;

        let type_name = &self.type_name;

        let doc = format!(" `{}`", self.signature);

        let field_list = self.field_list.as_slice();

        let type_list = self.type_list.as_slice();

        let message_list = self.message_list.as_slice();

        let message = if message_list.is_empty() {
            quote!(#rt::Message::new())
        } else {
            quote! {
                [#(#message_list,)*].into_iter().collect()
            }
        };

        let stream = quote! {
            #[doc = #doc]
            #[derive(Debug, Clone, PartialEq, Eq, #rt::serde::Serialize, #rt::serde::Deserialize)]
            #[serde(crate = #serde_crate)]
            pub struct #struct_ident {
                #(#field_list,)*
            }

            impl #rt::TypedData for #struct_ident {
                fn name(&self) -> &str {
                    #type_name
                }

                fn r#type(&self) -> ::std::vec::Vec<#rt::TypeField> {
                    ::std::vec![#(#type_list,)*]
                }

                fn message(&self) -> #rt::Message {
                    #message
                }
            }

            impl #struct_ident {
                /// Compute the EIP-712 digest of this message bound to `domain`.
                pub fn typed_data_and_hash(&self, domain: &#rt::Domain) -> #rt::Result<#rt::H256> {
                    let envelope = #rt::TypedDataEnvelope {
                        types: [
                            (
                                #EIP712_DOMAIN_NAME.to_owned(),
                                ::std::vec![
                                    #rt::TypeField::new("name", "string"),
                                    #rt::TypeField::new("version", "string"),
                                    #rt::TypeField::new("chainId", "uint256"),
                                    #rt::TypeField::new("verifyingContract", "address"),
                                ],
                            ),
                            (#type_name.to_owned(), #rt::TypedData::r#type(self)),
                        ]
                        .into_iter()
                        .collect(),
                        primary_type: #type_name.to_owned(),
                        domain: domain.clone(),
                        message: #rt::TypedData::message(self),
                    };

                    envelope.hash()
                }
            }
        };

        context.structs.push(stream);

        Ok(())
    }
}

fn conversion_expr(rt: &TokenStream, conversion: Conversion, access: TokenStream) -> TokenStream {
    match conversion {
        Conversion::Hex => quote!(#rt::Value::String(#rt::encode_big(&#access))),
        Conversion::Decimal => quote!(#rt::Value::String(#access.to_string())),
        Conversion::Checksum => quote!(#rt::Value::String(#rt::checksum(&#access))),
        Conversion::Identity => quote!(#rt::Value::from(#access.clone())),
        Conversion::Widen => quote!(any_slice(&#access)),
    }
}

/// Parse `name` as a plain identifier, keywords are rejected.
fn to_ident(name: &str) -> Result<Ident> {
    syn::parse_str::<Ident>(name)
        .map_err(|_| BindError::Template(format!("invalid identifier `{}`", name)))
}

/// Like [`to_ident`], keywords fall back to raw identifiers (`r#type`).
fn to_field_ident(name: &str) -> Result<Ident> {
    let name = name.to_snek_case();

    to_ident(&name).or_else(|_| {
        syn::parse_str::<Ident>(&format!("r#{}", name))
            .map_err(|_| BindError::Template(format!("invalid field identifier `{}`", name)))
    })
}

fn parse_tokens(source: &str) -> Result<TokenStream> {
    source
        .parse()
        .map_err(|err: LexError| {
            BindError::Template(format!("parse `{}` failed: {}", source, err))
        })
}

fn check_package(package: &str) -> Result<()> {
    to_ident(package)
        .map(|_| ())
        .map_err(|_| BindError::Template(format!("invalid package name `{}`", package)))
}

/// Generate the token stream of `declarations`, referencing the runtime crate through `runtime`.
pub fn expand(
    declarations: &[TypeDeclaration],
    package: &str,
    registry: &TypeRegistry,
    runtime: &str,
) -> Result<TokenStream> {
    let cx = BinderContext::new(package, declarations, registry);

    bind(&cx, RustBinder::new(runtime))
}

/// Parse generated tokens as a rust file and pretty print it.
///
/// Returns [`BindError::Template`] if the tokens are not a valid rust file.
pub fn canonicalize(package: &str, stream: TokenStream) -> Result<String> {
    let file = syn::parse2::<syn::File>(stream)
        .map_err(|err| BindError::Template(format!("generated source rejected: {}", err)))?;

    Ok(format!(
        "// Code generated by typed712-bind for package `{}`. DO NOT EDIT.\n\n{}",
        package,
        prettyplease::unparse(&file)
    ))
}

/// Generate the formatted rust source of `declarations`.
///
/// The output only depends on the inputs: the same declarations and package name always
/// produce the same source text.
pub fn synthesize(
    declarations: &[TypeDeclaration],
    package: &str,
    registry: &TypeRegistry,
) -> Result<String> {
    let stream = expand(declarations, package, registry, DEFAULT_RUNTIME)?;

    canonicalize(package, stream)
}

/// A utility tool to generate rust bind code and write to file.
///
/// Nothing is written unless every declaration is generated successfully. The source is
/// staged in a sibling temporary file and renamed over `path`, so `path` never holds a
/// partial write.
pub fn write_file<P: AsRef<Path>>(
    schema: &Schema,
    registry: &TypeRegistry,
    package: &str,
    path: P,
) -> Result<()> {
    let source = synthesize(schema.declarations(), package, registry)?;

    if let Some(parent) = path.as_ref().parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let tmp = temp_path(path.as_ref())?;

    if let Err(err) = fs::write(&tmp, source).and_then(|_| fs::rename(&tmp, path.as_ref())) {
        _ = fs::remove_file(&tmp);

        return Err(err.into());
    }

    log::info!(
        "successfully generated eip712 types at: {}",
        path.as_ref().display()
    );

    Ok(())
}

/// Sibling of `path` the output is staged in before it is renamed into place.
fn temp_path(path: &Path) -> Result<PathBuf> {
    let file_name = path.file_name().ok_or_else(|| {
        BindError::Io(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("output path has no file name: {}", path.display()),
        ))
    })?;

    let mut tmp = OsString::from(".");
    tmp.push(file_name);
    tmp.push(".tmp");

    Ok(path.with_file_name(tmp))
}

/// Load the schema file, check it against `registry` and write the generated bindings to `target`.
pub fn generate<S: AsRef<Path>, T: AsRef<Path>>(
    schema_path: S,
    registry: &TypeRegistry,
    package: &str,
    target: T,
) -> Result<()> {
    let schema = Schema::load(schema_path)?;

    schema.validate(registry)?;

    log::debug!("generate {} types, package={}", schema.len(), package);

    write_file(&schema, registry, package, target)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ping() -> Vec<TypeDeclaration> {
        vec![TypeDeclaration::new(
            "Ping",
            vec![Field::new("value", "uint256")],
        )]
    }

    #[test]
    fn test_synthesize_ping() {
        let source = synthesize(&ping(), "eip712_types", TypeRegistry::builtin()).unwrap();

        assert!(source.starts_with(
            "// Code generated by typed712-bind for package `eip712_types`. DO NOT EDIT."
        ));
        assert!(source.contains("/// `Ping(uint256 value)`"));
        assert!(source.contains("pub struct Ping {"));
        assert!(source.contains("pub value: typed712::U256,"));
        assert!(source.contains("impl typed712::TypedData for Ping {"));
        assert!(source.contains("typed712::TypeField::new(\"value\", \"uint256\")"));
        assert!(source.contains("typed712::encode_big(&self.value)"));
        assert!(source.contains("pub fn typed_data_and_hash("));
        assert!(!source.contains("fn any_slice"));
    }

    #[test]
    fn test_deterministic() {
        let declarations = vec![
            TypeDeclaration::new(
                "MintVehicleSign",
                vec![
                    Field::new("manufacturerNode", "uint256"),
                    Field::new("owner", "address"),
                    Field::new("attributes", "string[]"),
                    Field::new("infos", "string[]"),
                    Field::new("nonce", "uint256"),
                ],
            ),
            TypeDeclaration::new("BurnVehicleSign", vec![Field::new("vehicleNode", "uint256")]),
        ];

        let first = synthesize(&declarations, "eip712_types", TypeRegistry::builtin()).unwrap();

        for _ in 0..3 {
            assert_eq!(
                synthesize(&declarations, "eip712_types", TypeRegistry::builtin()).unwrap(),
                first
            );
        }

        // the widening helper is emitted once.
        assert_eq!(first.matches("fn any_slice").count(), 1);
        assert!(first.contains("any_slice(&self.attributes)"));
        assert!(first.contains("pub manufacturer_node: typed712::U256,"));
        assert!(first.contains("#[serde(rename = \"manufacturerNode\")]"));
        assert!(first.contains("typed712::checksum(&self.owner)"));

        let mint = first.find("pub struct MintVehicleSign").unwrap();
        let burn = first.find("pub struct BurnVehicleSign").unwrap();

        assert!(mint < burn);

        let positions = ["manufacturerNode", "owner", "attributes", "infos", "nonce"]
            .iter()
            .map(|name| {
                first
                    .find(&format!("typed712::TypeField::new(\"{}\"", name))
                    .unwrap()
            })
            .collect::<Vec<_>>();

        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_empty_fields() {
        let source = synthesize(
            &[TypeDeclaration::new("Empty", vec![])],
            "eip712_types",
            TypeRegistry::builtin(),
        )
        .unwrap();

        assert!(source.contains("pub struct Empty {}"));
        assert!(source.contains("typed712::Message::new()"));
        assert!(source.contains("::std::vec![]"));
    }

    #[test]
    fn test_keyword_field() {
        let source = synthesize(
            &[TypeDeclaration::new(
                "Order",
                vec![Field::new("type", "uint8"), Field::new("flag", "bool")],
            )],
            "eip712_types",
            TypeRegistry::builtin(),
        )
        .unwrap();

        assert!(source.contains("pub r#type: u8,"));
        assert!(source.contains("self.r#type.to_string()"));
        assert!(source.contains("typed712::Value::from(self.flag.clone())"));
    }

    #[test]
    fn test_storage_type_matches_registry() {
        let registry = TypeRegistry::builtin();

        for tag in registry.tags() {
            let source = synthesize(
                &[TypeDeclaration::new("Holder", vec![Field::new("item", tag)])],
                "eip712_types",
                registry,
            )
            .unwrap();

            let storage = registry.resolve(tag).unwrap().storage_type(DEFAULT_RUNTIME);

            let storage = parse_tokens(&storage).unwrap();

            let file = syn::parse_file(source.as_str()).unwrap();

            let item = file
                .items
                .iter()
                .find_map(|item| match item {
                    syn::Item::Struct(item) => Some(item),
                    _ => None,
                })
                .unwrap();

            let field = item.fields.iter().next().unwrap();

            let ty = &field.ty;

            let strip = |s: String| s.split_whitespace().collect::<String>();

            assert_eq!(
                strip(quote!(#ty).to_string()),
                strip(storage.to_string()),
                "{}",
                tag
            );
        }
    }

    #[test]
    fn test_identifiers() {
        assert_eq!(to_ident("Vec").unwrap().to_string(), "Vec");

        for name in ["fn", "self", "Self", "crate", "_", "1a", "a-b", ""] {
            assert!(to_ident(name).is_err(), "{}", name);
        }

        assert_eq!(to_field_ident("type").unwrap().to_string(), "r#type");
        assert_eq!(to_field_ident("matchId").unwrap().to_string(), "match_id");

        // keywords that can not be raw identifiers are errors, not panics.
        for name in ["self", "super", "crate"] {
            assert!(matches!(to_field_ident(name), Err(BindError::Template(_))));
        }
    }

    #[test]
    fn test_prelude_names_are_qualified() {
        let source = synthesize(
            &[
                TypeDeclaration::new("Vec", vec![Field::new("x", "uint256")]),
                TypeDeclaration::new("Into", vec![Field::new("tags", "string[]")]),
            ],
            "eip712_types",
            TypeRegistry::builtin(),
        )
        .unwrap();

        assert!(source.contains("pub struct Vec {"));
        assert!(source.contains("fn r#type(&self) -> ::std::vec::Vec<typed712::TypeField>"));
        assert!(source.contains("::core::convert::Into<typed712::Value>"));
        assert!(!source.contains("-> Vec<"));
        assert!(!source.contains(" vec!["));
    }

    #[test]
    fn test_invalid_package() {
        for package in ["", "1abc", "a-b", "mod", "self"] {
            assert!(
                matches!(
                    synthesize(&ping(), package, TypeRegistry::builtin()),
                    Err(BindError::Template(_))
                ),
                "{}",
                package
            );
        }
    }

    #[test]
    fn test_bad_storage_type() {
        let registry = TypeRegistry::from_slice(
            br#"{ "uint256": { "storage": "Vec<", "conversion": "hex" } }"#,
        )
        .unwrap();

        assert!(matches!(
            synthesize(&ping(), "eip712_types", &registry),
            Err(BindError::Template(_))
        ));

        let registry = TypeRegistry::from_slice(
            br#"{ "uint256": { "storage": "\"", "conversion": "hex" } }"#,
        )
        .unwrap();

        assert!(matches!(
            synthesize(&ping(), "eip712_types", &registry),
            Err(BindError::Template(_))
        ));
    }

    #[test]
    fn test_custom_runtime() {
        let stream =
            expand(&ping(), "eip712_types", TypeRegistry::builtin(), "crate::rt").unwrap();

        let source = canonicalize("eip712_types", stream).unwrap();

        assert!(source.contains("pub value: crate::rt::U256,"));
        assert!(source.contains("#[serde(crate = \"crate::rt::serde\")]"));
    }
}
