//! Template contexts — the named slots each renderer supplies for one arity.
//!
//! A template may only reference the fields of the context its renderer
//! builds. Tera rejects undefined variables at render time, so a template
//! that reaches for a slot outside its context fails loudly.

use serde::Serialize;

use crate::arity::ArityList;
use crate::error::RenderError;
use crate::ordinal::ordinal_word;

/// Slots for the simple renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimpleContext {
    /// `"T1, T2, ..., Ta"`.
    pub full_list: String,
}

impl SimpleContext {
    pub fn for_arity(list: &ArityList) -> Self {
        SimpleContext {
            full_list: list.full_join(),
        }
    }

    pub fn to_tera_context(&self) -> Result<tera::Context, RenderError> {
        tera::Context::from_serialize(self).map_err(RenderError::from)
    }
}

/// Slots for the header-variant renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderContext {
    /// `"T1, T2, ..., Ta"`.
    pub full_list: String,
    /// The arity itself.
    pub arity: usize,
    /// Ordinal word for the arity: "first", "second", ...
    pub ordinal: String,
    /// All names but the newest, comma-joined without spaces; empty at arity 1.
    pub trimmed_list: String,
}

impl HeaderContext {
    pub fn for_arity(list: &ArityList) -> Result<Self, RenderError> {
        Ok(HeaderContext {
            full_list: list.full_join(),
            arity: list.arity(),
            ordinal: ordinal_word(list.arity())?,
            trimmed_list: list.trimmed_join(),
        })
    }

    pub fn to_tera_context(&self) -> Result<tera::Context, RenderError> {
        tera::Context::from_serialize(self).map_err(RenderError::from)
    }
}
