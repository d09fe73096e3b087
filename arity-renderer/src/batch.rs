//! Batch driver — walks the catalog and writes labelled, delimited blocks.
//!
//! ```text
//! <label>
//! <block for arity 1>
//! ...
//! <block for arity N>
//! ---
//! ```
//!
//! Collections are written in catalog order, labels in ascending
//! lexicographic order within each collection, arities ascending.

use std::io::Write;

use arity_core::Catalog;

use crate::engine::TemplateEngine;
use crate::error::RenderError;

/// Line written after the last block of every label.
pub const CLOSING_DELIMITER: &str = "---";

/// Counts reported after a batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchSummary {
    pub collections: usize,
    pub labels: usize,
    pub blocks: usize,
}

/// A compiled catalog ready to be written out.
pub struct BatchDriver {
    catalog: Catalog,
    engine: TemplateEngine,
}

impl BatchDriver {
    /// Compile every template in `catalog`. Fails before any output if a
    /// template does not fit its renderer.
    pub fn new(catalog: Catalog) -> Result<Self, RenderError> {
        let engine = TemplateEngine::new(&catalog)?;
        Ok(BatchDriver { catalog, engine })
    }

    /// [`BatchDriver::new`] over the catalog compiled into the binary.
    pub fn builtin() -> Result<Self, RenderError> {
        Self::new(Catalog::builtin()?)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Write every label's blocks to `out`.
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<BatchSummary, RenderError> {
        let mut summary = BatchSummary::default();
        for collection in &self.catalog.collections {
            tracing::debug!(
                collection = %collection.name,
                destination = %collection.destination,
                "rendering collection"
            );
            for entry in collection.sorted_entries() {
                let blocks = self.engine.render_entry(collection, entry)?;
                tracing::debug!(label = %entry.label, renderer = %entry.renderer, blocks = blocks.len(), "rendered label");

                writeln!(out, "{}", entry.label)?;
                for block in &blocks {
                    writeln!(out, "{block}")?;
                }
                writeln!(out, "{CLOSING_DELIMITER}")?;

                summary.labels += 1;
                summary.blocks += blocks.len();
            }
            summary.collections += 1;
        }
        out.flush()?;
        tracing::info!(
            collections = summary.collections,
            labels = summary.labels,
            blocks = summary.blocks,
            "batch complete"
        );
        Ok(summary)
    }

    /// Render the whole batch into a `String`.
    pub fn render_to_string(&self) -> Result<String, RenderError> {
        let mut buf = Vec::new();
        self.write_to(&mut buf)?;
        Ok(String::from_utf8(buf)?)
    }
}
