//! This mod provides the language independent code generation driver.

use proc_macro2::TokenStream;

use crate::{
    errors::BindError,
    mapping::{RegistryEntry, TypeRegistry},
    typedef::{Field, TypeDeclaration},
};

/// Context data to invoke [`bind`] function.
pub struct BinderContext<'a> {
    package: &'a str,
    declarations: &'a [TypeDeclaration],
    registry: &'a TypeRegistry,
}

impl<'a> BinderContext<'a> {
    /// Create a new `BinderContext` object.
    pub fn new(
        package: &'a str,
        declarations: &'a [TypeDeclaration],
        registry: &'a TypeRegistry,
    ) -> Self {
        Self {
            package,
            declarations,
            registry,
        }
    }

    /// Name of the generated package.
    pub fn package(&self) -> &str {
        self.package
    }

    pub fn declarations(&self) -> &[TypeDeclaration] {
        self.declarations
    }

    pub fn registry(&self) -> &TypeRegistry {
        self.registry
    }
}

/// A binder is the specific-language code generator of typed data schema.
pub trait Binder {
    type Error: Into<BindError>;

    type PackageBinder: PackageBinder<Error = Self::Error>;

    /// Start a new process of package code generation.
    fn prepare(
        &mut self,
        cx: &BinderContext<'_>,
        package: &str,
    ) -> Result<Self::PackageBinder, Self::Error>;
}

/// A trait object returns by [`prepare`](Binder::prepare) function.
pub trait PackageBinder {
    type Error: Into<BindError>;

    type StructBinder: StructBinder<Error = Self::Error>;

    /// This function is called once per type declaration, in schema order.
    fn bind_struct(
        &mut self,
        cx: &BinderContext<'_>,
        declaration: &TypeDeclaration,
    ) -> Result<Self::StructBinder, Self::Error>;

    /// This function is called to collect the generated codes after all declarations are bound.
    fn finalize(&mut self, cx: &BinderContext<'_>) -> Result<TokenStream, Self::Error>;
}

/// A trait object returns by [`bind_struct`](PackageBinder::bind_struct) function.
pub trait StructBinder {
    type Error: Into<BindError>;

    /// This function is called once per field, in declaration order, with the field's
    /// resolved registry entry.
    fn bind_field(
        &mut self,
        cx: &BinderContext<'_>,
        index: usize,
        field: &Field,
        entry: &RegistryEntry,
    ) -> Result<(), Self::Error>;

    /// This function is called to clean up resources after the code generation process is end.
    fn finalize(&mut self, cx: &BinderContext<'_>) -> Result<(), Self::Error>;
}

/// Invoke code generation with `context data`.
///
/// On success, returns the [`TokenStream`] of generated codes.
pub fn bind<B: Binder>(cx: &BinderContext<'_>, mut binder: B) -> Result<TokenStream, BindError> {
    let mut package = binder.prepare(cx, cx.package).map_err(Into::into)?;

    for declaration in cx.declarations {
        log::trace!("bind {}", declaration.signature());

        let mut binder = package.bind_struct(cx, declaration).map_err(Into::into)?;

        for (index, field) in declaration.fields.iter().enumerate() {
            let entry = cx.registry.resolve_field(declaration, field)?;

            binder
                .bind_field(cx, index, field, entry)
                .map_err(Into::into)?;
        }

        binder.finalize(cx).map_err(Into::into)?;
    }

    package.finalize(cx).map_err(Into::into)
}
