//! PDF emitter using lopdf.
//!
//! Converts positioned blocks into the final byte sequence. Output is
//! byte-identical for identical inputs: object ids are allocated in a fixed
//! order, font resources are named in first-use order, and no clock is read
//! anywhere. A failure never returns partial output.

mod encoding;
mod renderer;

pub use encoding::encode_win_ansi;
pub use renderer::PdfRenderer;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF generation error: {0}")]
    Pdf(String),

    #[error("Font resolution failed: {0}")]
    Font(#[from] varsel_fonts::FontError),

    #[error("Other rendering error: {0}")]
    Other(String),
}

impl From<lopdf::Error> for RenderError {
    fn from(err: lopdf::Error) -> Self {
        RenderError::Pdf(err.to_string())
    }
}

/// Convert layout Y coordinate to PDF Y coordinate (flip origin).
pub(crate) fn flip_y(y: f32, page_height: f32) -> f32 {
    page_height - y
}
