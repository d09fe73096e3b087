//! arity core library — catalog types, embedded catalog, errors.
//!
//! - [`types`] — labels, renderer kinds, entries, collections
//! - [`catalog`] — embedded YAML catalog, parsing and validation
//! - [`error`] — [`CatalogError`]

pub mod catalog;
pub mod error;
pub mod types;

pub use catalog::BUILTIN_CATALOG;
pub use error::CatalogError;
pub use types::{Catalog, Headers, Label, RendererKind, TemplateCollection, TemplateEntry};
