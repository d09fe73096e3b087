//! Domain types for the overload catalog.
//!
//! A [`Catalog`] is an ordered list of [`TemplateCollection`]s, each holding
//! the [`TemplateEntry`]s destined for one target source file. All types
//! deserialize from the catalog YAML via serde + serde_yaml.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A strongly-typed label for a template entry (e.g. `GYB12`).
///
/// Ordering is plain lexicographic string ordering, so `GYB10 < GYB9`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Label(pub String);

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for Label {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Label {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Which renderer expands a template entry.
///
/// Assigned by hand per label in the catalog; never inferred from the
/// template text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum RendererKind {
    /// Supplies `full_list` only.
    #[default]
    Simple,
    /// Supplies `full_list`, `arity`, `ordinal` and `trimmed_list`, and
    /// prefixes the body with a first-arity or later-arity header.
    HeaderVariant,
}

impl RendererKind {
    /// Variable names a template rendered by this kind may reference.
    pub fn slots(&self) -> &'static [&'static str] {
        match self {
            RendererKind::Simple => &["full_list"],
            RendererKind::HeaderVariant => &["full_list", "arity", "ordinal", "trimmed_list"],
        }
    }
}

impl fmt::Display for RendererKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RendererKind::Simple => write!(f, "simple"),
            RendererKind::HeaderVariant => write!(f, "header-variant"),
        }
    }
}

// ---------------------------------------------------------------------------
// Domain structs
// ---------------------------------------------------------------------------

/// Header fragments for a [`RendererKind::HeaderVariant`] entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Headers {
    /// Prefixed to the body at arity 1. Must not reference `trimmed_list`.
    pub first: String,
    /// Prefixed to the body at every arity after the first.
    pub rest: String,
}

/// One labelled template inside a collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateEntry {
    pub label: Label,
    #[serde(default)]
    pub renderer: RendererKind,
    /// Template body (the whole template for simple entries).
    pub template: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<Headers>,
}

impl TemplateEntry {
    /// A simple entry.
    pub fn simple(label: impl Into<Label>, template: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            renderer: RendererKind::Simple,
            template: template.into(),
            headers: None,
        }
    }

    /// A header-variant entry.
    pub fn with_headers(
        label: impl Into<Label>,
        body: impl Into<String>,
        first: impl Into<String>,
        rest: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            renderer: RendererKind::HeaderVariant,
            template: body.into(),
            headers: Some(Headers {
                first: first.into(),
                rest: rest.into(),
            }),
        }
    }
}

/// All generated members destined for one output file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateCollection {
    pub name: String,
    /// Target source file the generated text is pasted into. Informational.
    pub destination: String,
    #[serde(default)]
    pub entries: Vec<TemplateEntry>,
}

impl TemplateCollection {
    /// Entries in ascending label order, independent of declaration order.
    pub fn sorted_entries(&self) -> Vec<&TemplateEntry> {
        let mut entries: Vec<&TemplateEntry> = self.entries.iter().collect();
        entries.sort_by(|a, b| a.label.cmp(&b.label));
        entries
    }
}

/// Root of the catalog YAML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Highest arity generated for every entry.
    pub repeat_count: usize,
    /// Emitted in declaration order.
    #[serde(default)]
    pub collections: Vec<TemplateCollection>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
