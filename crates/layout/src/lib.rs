//! Layout and pagination engine.
//!
//! Walks a [`varsel_idf::DocumentTree`] in fixed section order and emits
//! positioned blocks across pages. Pages are sealed once their content
//! height would exceed the page bound; a sealed page is never mutated.

use thiserror::Error;

mod block;
mod engine;
pub mod paginate;
mod wrap;

pub use block::{BlockKind, LaidOutDocument, Page, PositionedBlock, TextLine};
pub use engine::LayoutEngine;
pub use paginate::{BlockOverflow, PageWriter};

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Font resolution failed: {0}")]
    Font(#[from] varsel_fonts::FontError),
}
