use std::{env, path::PathBuf};

use heck::ToSnekCase;
use proc_macro::TokenStream;
use quote::quote;
use syn::{parse::Parse, parse_macro_input, Ident, LitStr, Token};
use typed712_bind::{
    mapping::TypeRegistry,
    rustgen::{expand, DEFAULT_RUNTIME},
    typedef::Schema,
};

struct TypedDataInput {
    mod_name: Option<Ident>,
    schema_path: LitStr,
}

impl Parse for TypedDataInput {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        let mod_name: Option<Ident> = if input.peek(Ident) {
            Some(input.parse()?)
        } else {
            None
        };

        if mod_name.is_some() {
            input.parse::<Token!(,)>()?;
        }

        let schema_path: LitStr = input.parse()?;

        Ok(Self {
            mod_name,
            schema_path,
        })
    }
}

fn schema_file(path: &LitStr) -> syn::Result<PathBuf> {
    let dir = env::var("CARGO_MANIFEST_DIR").map_err(|err| {
        syn::Error::new(path.span(), format!("find CARGO_MANIFEST_DIR: {}", err))
    })?;

    Ok(PathBuf::from(dir).join(path.value()))
}

fn typed_data_impl(input: TypedDataInput) -> syn::Result<proc_macro2::TokenStream> {
    let span = input.schema_path.span();

    let path = schema_file(&input.schema_path)?;

    let mod_name = match input.mod_name {
        Some(name) => name,
        None => {
            let stem = path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .ok_or_else(|| syn::Error::new(span, "schema path has no file name"))?;

            syn::parse_str::<Ident>(&stem.to_snek_case())
                .map_err(|_| syn::Error::new(span, format!("invalid module name `{}`", stem)))?
        }
    };

    let package = mod_name.to_string();

    let schema = Schema::load(&path)
        .map_err(|err| syn::Error::new(span, format!("{}: {}", path.display(), err)))?;

    let token_stream = expand(
        schema.declarations(),
        &package,
        TypeRegistry::builtin(),
        DEFAULT_RUNTIME,
    )
    .map_err(|err| syn::Error::new(span, err.to_string()))?;

    let tracked = path.to_string_lossy().into_owned();

    Ok(quote! {
        pub mod #mod_name {
            const _SCHEMA_SOURCE: &str = include_str!(#tracked);

            #token_stream
        }
    })
}

/// Expand a json type schema, relative to `CARGO_MANIFEST_DIR`, into a module of typed data records.
///
/// ```ignore
/// typed712::typed_data!(eip712_types, "types/eip712_types.json");
/// ```
///
/// The module name defaults to the snake cased file stem of the schema path.
#[proc_macro]
pub fn typed_data(item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as TypedDataInput);

    typed_data_impl(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
