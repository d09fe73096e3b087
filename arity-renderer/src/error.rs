//! Error types for arity-renderer.

use thiserror::Error;

use arity_core::{CatalogError, Label, RendererKind};

/// All errors that can arise from expanding templates.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Tera template engine error (syntax error, undefined variable).
    #[error("template engine error: {0}")]
    Tera(#[from] tera::Error),

    /// A template failed its probe render: it references a slot its
    /// renderer does not supply, or is otherwise malformed.
    #[error("template {label} does not render with the {kind} renderer (available slots: {slots}): {source}")]
    SlotMismatch {
        label: Label,
        kind: RendererKind,
        slots: String,
        #[source]
        source: tera::Error,
    },

    /// An entry was rendered that was not part of the compiled catalog.
    #[error("entry {label} in collection '{collection}' is not in the compiled catalog")]
    UnknownEntry { collection: String, label: Label },

    /// The catalog itself was invalid.
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// No ordinal word is defined for this number.
    #[error("no ordinal word for {0}; supported range is 1..=999")]
    OrdinalOutOfRange(usize),

    /// Rendered output was not valid UTF-8.
    #[error("rendered output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// Writing rendered output failed.
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}
