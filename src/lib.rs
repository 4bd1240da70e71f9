//! # varsel
//!
//! Trip-intention safety document generator. Takes a validated form payload,
//! a font registry and a message catalog, and deterministically produces one
//! paginated PDF a rescuer can read under time pressure.
//!
//! The pipeline runs three pure stages:
//! - **builder**: raw payload → validated [`DocumentTree`]
//! - **layout**: document tree → positioned blocks across pages
//! - **renderer**: positioned blocks → PDF bytes
//!
//! Each stage returns a `Result` consumed explicitly by its caller; errors
//! never cross stage boundaries as unchecked signals. The core touches no
//! filesystem, network or display surface: fonts arrive through a
//! [`FontSource`], catalogs as preloaded mappings, and the output is one
//! immutable byte sequence.

pub mod error;
mod pipeline;

pub use error::PipelineError;
pub use pipeline::Pipeline;

// Re-export commonly used types from the member crates
pub use varsel_fonts::{FontError, FontRegistry, FontSource, FontSpec, InMemoryFontSource};
pub use varsel_idf::{Activity, DocumentTree, TeamMember, TripNarrative, TripWindow};
pub use varsel_layout::{BlockOverflow, LaidOutDocument, LayoutEngine};
pub use varsel_model::{IntentionsRequest, MemberRecord, ValidationError, build};
pub use varsel_render_lopdf::{PdfRenderer, RenderError};
pub use varsel_style::{FontStyle, Margins, PageLayout, PageSize, Theme};
pub use varsel_types::MessageCatalog;
