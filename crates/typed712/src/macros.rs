pub use typed712_macros;

/// Generate typed data bindings from a json schema file, relative to `CARGO_MANIFEST_DIR`.
///
/// With an identifier the bindings are placed in a module of that name, otherwise the module
/// is named after the schema file stem.
#[macro_export]
macro_rules! typed_data {
    ($schema_path: literal) => {
        $crate::macros::typed712_macros::typed_data!($schema_path);
    };
    ($ident: ident, $schema_path: literal) => {
        $crate::macros::typed712_macros::typed_data!($ident, $schema_path);
    };
}
