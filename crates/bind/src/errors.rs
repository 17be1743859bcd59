//! Error type for schema loading and code generation.

/// Every variant is fatal to a generation run.
#[derive(Debug, thiserror::Error)]
pub enum BindError {
    /// The input is not a mapping from type name to a field list.
    #[error("malformed schema: {0}")]
    MalformedSchema(String),

    #[error("invalid field #{index} of `{type_name}`: {reason}")]
    InvalidField {
        type_name: String,
        index: usize,
        reason: String,
    },

    #[error("unsupported type `{tag}`{}", location(.field))]
    UnsupportedType { tag: String, field: Option<String> },

    #[error("malformed type mapping: {0}")]
    MalformedMapping(String),

    /// Rendering failed, or the rendered source was rejected by the canonicalization step.
    #[error("render generated source failed: {0}")]
    Template(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn location(field: &Option<String>) -> String {
    match field {
        Some(field) => format!(", field `{}`", field),
        None => String::new(),
    }
}

/// Result type for typed712-bind.
pub type Result<T> = std::result::Result<T, BindError>;
