//! Error types for arity-core.

use thiserror::Error;

use crate::types::Label;

/// All errors that can arise from loading or validating a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// YAML parse error; serde_yaml's message carries line context.
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// `repeat_count` must be at least 1.
    #[error("catalog repeat_count must be at least 1")]
    ZeroRepeatCount,

    /// Two collections share a name.
    #[error("duplicate collection name '{collection}'")]
    DuplicateCollection { collection: String },

    /// Two entries in one collection share a label.
    #[error("duplicate label {label} in collection '{collection}'")]
    DuplicateLabel { collection: String, label: Label },

    /// A header-variant entry was declared without its header fragments.
    #[error("entry {label} in collection '{collection}' uses the header-variant renderer but has no headers")]
    MissingHeaders { collection: String, label: Label },

    /// A simple entry carried header fragments it would silently ignore.
    #[error("entry {label} in collection '{collection}' uses the simple renderer but declares headers")]
    UnexpectedHeaders { collection: String, label: Label },
}
