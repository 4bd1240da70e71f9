//! The unified error type for whole-pipeline operations.

use thiserror::Error;

/// The main error enum for one generation request.
///
/// `Validation` is caller-correctable and surfaced to the form layer
/// verbatim; the other variants are fatal for the request. No variant ever
/// accompanies partial output.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Validation error: {0}")]
    Validation(#[from] varsel_model::ValidationError),

    #[error("Font configuration error: {0}")]
    Font(#[from] varsel_fonts::FontError),

    #[error("Layout error: {0}")]
    Layout(#[from] varsel_layout::LayoutError),

    #[error("Rendering error: {0}")]
    Render(#[from] varsel_render_lopdf::RenderError),

    #[error("JSON deserialization error: {0}")]
    Json(#[from] serde_json::Error),
}
