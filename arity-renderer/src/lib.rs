//! # arity-renderer
//!
//! Tera-based expansion of catalog templates into arity-indexed overload
//! declarations.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use arity_renderer::{render_simple, BatchDriver};
//!
//! fn generate() -> Result<(), arity_renderer::RenderError> {
//!     let blocks = render_simple(3, "Foo<{{ full_list }}>")?;
//!     assert_eq!(blocks[2], "Foo<T1, T2, T3>");
//!
//!     let driver = BatchDriver::builtin()?;
//!     driver.write_to(&mut std::io::stdout().lock())?;
//!     Ok(())
//! }
//! ```

pub mod arity;
pub mod batch;
pub mod context;
pub mod engine;
pub mod error;
pub mod ordinal;

pub use arity::ArityList;
pub use batch::{BatchDriver, BatchSummary, CLOSING_DELIMITER};
pub use context::{HeaderContext, SimpleContext};
pub use engine::{render_simple, render_with_header, TemplateEngine};
pub use error::RenderError;
pub use ordinal::ordinal_word;
