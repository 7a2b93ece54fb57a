//! Error types for code generation

use thiserror::Error;

/// Result type for codegen operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during code generation
///
/// Every variant is fatal: the run stops and no output file is written.
#[derive(Error, Debug)]
pub enum Error {
    /// The external normalization step failed
    #[error("failed to normalize '{input}': {message}")]
    Normalization {
        /// Input schema file
        input: String,
        /// What went wrong (tool stderr when available)
        message: String,
    },

    /// The document root is not a module, container, list or augment
    #[error("unsupported root element <{tag}>")]
    InvalidRoot {
        /// Tag of the root element
        tag: String,
    },

    /// Leaf type has no entry in the primitive type table
    #[error("unknown primitive type '{type_name}' at {path}")]
    UnknownPrimitiveType {
        /// Schema type name
        type_name: String,
        /// Path of the offending leaf
        path: String,
    },

    /// List has no child matching its declared key
    #[error("list at {path} has no key leaf named '{key}'")]
    MissingListKey {
        /// Path of the list
        path: String,
        /// Declared key name
        key: String,
    },

    /// Augment has no target-node reference
    #[error("augment at {path} has no target node")]
    MissingAugmentTarget {
        /// Path the augment would have had
        path: String,
    },

    /// A node that needs a class or field name has none
    #[error("unnamed schema node at {path}")]
    UnnamedNode {
        /// Path of the unnamed node
        path: String,
    },

    /// Two siblings map to the same generated identifier
    #[error("name collision at {path}: '{identifier}' is generated twice")]
    NameCollision {
        /// Path of the node owning both siblings
        path: String,
        /// The duplicated identifier
        identifier: String,
    },

    /// A generated file would overwrite the scaffolding header
    #[error("output file '{file_name}' is reserved for the scaffolding header")]
    ReservedOutputName {
        /// Conflicting file name
        file_name: String,
    },

    /// Invalid output template
    #[error("invalid template: {0}")]
    InvalidTemplate(#[from] minijinja::Error),

    /// Error from the core crate (YIN parsing, configuration)
    #[error(transparent)]
    Core(#[from] yang2cpp_core::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
