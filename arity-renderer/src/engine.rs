//! Tera expansion engine — [`render_simple`], [`render_with_header`] and the
//! catalog-backed [`TemplateEngine`].
//!
//! # Template names
//!
//! Entries are numbered in catalog order; `n` is that position.
//!
//! | Renderer       | Registered name(s)                   |
//! |----------------|--------------------------------------|
//! | simple         | `entry-<n>`                          |
//! | header-variant | `entry-<n>/first`, `entry-<n>/rest`  |
//!
//! Header-variant templates are registered pre-concatenated
//! (`header + body`), so each arity renders exactly one template.

use std::collections::HashMap;

use tera::Tera;

use arity_core::{Catalog, Label, RendererKind, TemplateCollection, TemplateEntry};

use crate::arity::ArityList;
use crate::context::{HeaderContext, SimpleContext};
use crate::error::RenderError;

// ---------------------------------------------------------------------------
// Expansion helpers
// ---------------------------------------------------------------------------

const ONE_OFF: &str = "template";
const ONE_OFF_FIRST: &str = "template/first";
const ONE_OFF_REST: &str = "template/rest";

fn new_tera() -> Tera {
    let mut tera = Tera::default();
    // Generated text is source code, never HTML.
    tera.autoescape_on(vec![]);
    tera
}

fn expand_simple(tera: &Tera, name: &str, count: usize) -> Result<Vec<String>, RenderError> {
    (1..=count)
        .map(|arity| -> Result<String, RenderError> {
            let ctx = SimpleContext::for_arity(&ArityList::new(arity)).to_tera_context()?;
            Ok(tera.render(name, &ctx)?)
        })
        .collect()
}

fn expand_with_header(
    tera: &Tera,
    first: &str,
    rest: &str,
    count: usize,
) -> Result<Vec<String>, RenderError> {
    (1..=count)
        .map(|arity| -> Result<String, RenderError> {
            let ctx = HeaderContext::for_arity(&ArityList::new(arity))?.to_tera_context()?;
            let name = if arity == 1 { first } else { rest };
            Ok(tera.render(name, &ctx)?)
        })
        .collect()
}

/// Render `template` once per arity `1..=count`, supplying `full_list`.
pub fn render_simple(count: usize, template: &str) -> Result<Vec<String>, RenderError> {
    let mut tera = new_tera();
    tera.add_raw_template(ONE_OFF, template)?;
    expand_simple(&tera, ONE_OFF, count)
}

/// Render `header_first + body` at arity 1 and `header_rest + body` at every
/// later arity up to `count`, supplying `full_list`, `arity`, `ordinal` and
/// `trimmed_list`.
pub fn render_with_header(
    count: usize,
    body: &str,
    header_first: &str,
    header_rest: &str,
) -> Result<Vec<String>, RenderError> {
    let mut tera = new_tera();
    tera.add_raw_templates(vec![
        (ONE_OFF_FIRST, format!("{header_first}{body}")),
        (ONE_OFF_REST, format!("{header_rest}{body}")),
    ])?;
    expand_with_header(&tera, ONE_OFF_FIRST, ONE_OFF_REST, count)
}

// ---------------------------------------------------------------------------
// Template naming
// ---------------------------------------------------------------------------

// Registered names are positional so that no collection name or label,
// whatever characters it holds, can make two entries share a template.
fn simple_name(index: usize) -> String {
    format!("entry-{index}")
}

fn first_name(index: usize) -> String {
    format!("entry-{index}/first")
}

fn rest_name(index: usize) -> String {
    format!("entry-{index}/rest")
}

fn slot_mismatch(entry: &TemplateEntry, source: tera::Error) -> RenderError {
    RenderError::SlotMismatch {
        label: entry.label.clone(),
        kind: entry.renderer,
        slots: entry.renderer.slots().join(", "),
        source,
    }
}

/// Registers every entry and returns the index of each `(collection, label)`.
fn build_tera(catalog: &Catalog) -> Result<(Tera, HashMap<(String, Label), usize>), RenderError> {
    let mut templates: Vec<(String, String)> = Vec::with_capacity(catalog.entry_count() * 2);
    let mut index = HashMap::with_capacity(catalog.entry_count());
    let entries = catalog
        .collections
        .iter()
        .flat_map(|c| c.entries.iter().map(move |e| (c, e)));
    for (i, (collection, entry)) in entries.enumerate() {
        match (&entry.renderer, &entry.headers) {
            (RendererKind::HeaderVariant, Some(headers)) => {
                templates.push((first_name(i), format!("{}{}", headers.first, entry.template)));
                templates.push((rest_name(i), format!("{}{}", headers.rest, entry.template)));
            }
            _ => templates.push((simple_name(i), entry.template.clone())),
        }
        index.insert((collection.name.clone(), entry.label.clone()), i);
    }

    let mut tera = new_tera();
    tera.add_raw_templates(templates)?;
    Ok((tera, index))
}

// ---------------------------------------------------------------------------
// TemplateEngine
// ---------------------------------------------------------------------------

/// Every catalog template, compiled and checked against its renderer's slots.
///
/// Construction parses all templates and probe-renders each one, so a
/// template that references a slot its renderer does not supply is rejected
/// before any output is produced.
pub struct TemplateEngine {
    tera: Tera,
    index: HashMap<(String, Label), usize>,
    repeat_count: usize,
}

impl TemplateEngine {
    /// Compile and probe every template in `catalog`.
    pub fn new(catalog: &Catalog) -> Result<Self, RenderError> {
        catalog.validate()?;
        let (tera, index) = build_tera(catalog)?;
        let engine = TemplateEngine {
            tera,
            index,
            repeat_count: catalog.repeat_count,
        };
        for collection in &catalog.collections {
            for entry in &collection.entries {
                engine.probe(engine.position(collection, entry)?, entry)?;
            }
        }
        Ok(engine)
    }

    pub fn repeat_count(&self) -> usize {
        self.repeat_count
    }

    /// Render one block per arity `1..=repeat_count` for `entry`.
    pub fn render_entry(
        &self,
        collection: &TemplateCollection,
        entry: &TemplateEntry,
    ) -> Result<Vec<String>, RenderError> {
        let i = self.position(collection, entry)?;
        match entry.renderer {
            RendererKind::Simple => expand_simple(&self.tera, &simple_name(i), self.repeat_count),
            RendererKind::HeaderVariant => expand_with_header(
                &self.tera,
                &first_name(i),
                &rest_name(i),
                self.repeat_count,
            ),
        }
    }

    fn position(
        &self,
        collection: &TemplateCollection,
        entry: &TemplateEntry,
    ) -> Result<usize, RenderError> {
        self.index
            .get(&(collection.name.clone(), entry.label.clone()))
            .copied()
            .ok_or_else(|| RenderError::UnknownEntry {
                collection: collection.name.clone(),
                label: entry.label.clone(),
            })
    }

    fn probe(&self, i: usize, entry: &TemplateEntry) -> Result<(), RenderError> {
        match entry.renderer {
            RendererKind::Simple => {
                let ctx = SimpleContext::for_arity(&ArityList::new(1)).to_tera_context()?;
                self.tera
                    .render(&simple_name(i), &ctx)
                    .map_err(|e| slot_mismatch(entry, e))?;
            }
            RendererKind::HeaderVariant => {
                let first = HeaderContext::for_arity(&ArityList::new(1))?.to_tera_context()?;
                self.tera
                    .render(&first_name(i), &first)
                    .map_err(|e| slot_mismatch(entry, e))?;
                let rest = HeaderContext::for_arity(&ArityList::new(2))?.to_tera_context()?;
                self.tera
                    .render(&rest_name(i), &rest)
                    .map_err(|e| slot_mismatch(entry, e))?;
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
