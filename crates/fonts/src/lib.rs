//! Font registry for the document pipeline.
//!
//! Fonts are supplied as `(handle, family, style)` triples at construction
//! time. The registry resolves `(family, style)` lookups with an explicit
//! fallback to the family's normal face, and fails closed when a family is
//! missing entirely: a safety document must never silently substitute glyphs.

mod registry;
mod source;

pub use registry::{FontRegistry, FontSpec, GlyphSource};
pub use source::{FontSource, InMemoryFontSource, SharedFontData};

use thiserror::Error;
use varsel_style::FontStyle;

#[derive(Error, Debug, Clone)]
pub enum FontError {
    #[error("Font variant already registered: '{family}' ({style})")]
    DuplicateFontVariant { family: String, style: FontStyle },

    #[error("No font registered for family '{family}' ({style})")]
    MissingFont { family: String, style: FontStyle },

    #[error("Failed to load font '{handle}': {message}")]
    LoadFailed { handle: String, message: String },
}
