use crate::PipelineError;
use std::sync::Arc;
use varsel_fonts::{FontRegistry, FontSource, FontSpec};
use varsel_idf::keys;
use varsel_layout::LayoutEngine;
use varsel_model::IntentionsRequest;
use varsel_render_lopdf::PdfRenderer;
use varsel_style::{FontStyle, PageLayout, Theme};
use varsel_types::MessageCatalog;

/// The generation pipeline: Builder → Layout → Renderer.
///
/// Construction populates the font registry and fails closed on any font
/// problem; afterwards the registry is an immutable snapshot, so any number
/// of `generate` calls may run concurrently without coordination.
pub struct Pipeline {
    fonts: Arc<FontRegistry>,
    theme: Theme,
    page: PageLayout,
}

impl Pipeline {
    /// Builds the pipeline from font sources and the two family roles the
    /// document needs: a title family for headings and a body family for
    /// labels and narrative. Both must provide at least the normal style;
    /// bold and italic variants are used opportunistically.
    pub fn new(
        source: &dyn FontSource,
        specs: &[FontSpec],
        title_family: &str,
        body_family: &str,
    ) -> Result<Self, PipelineError> {
        let registry = FontRegistry::from_sources(source, specs)?;
        // A missing family is a packaging defect; abort startup instead of
        // degrading glyph fidelity for a safety document.
        registry.resolve(title_family, FontStyle::Normal)?;
        registry.resolve(body_family, FontStyle::Normal)?;

        Ok(Self {
            fonts: Arc::new(registry),
            theme: Theme::new(title_family, body_family),
            page: PageLayout::default(),
        })
    }

    pub fn with_page_layout(mut self, page: PageLayout) -> Self {
        self.page = page;
        self
    }

    pub fn fonts(&self) -> &Arc<FontRegistry> {
        &self.fonts
    }

    /// Runs one generation request to completion.
    ///
    /// Returns the finished document bytes, or the first stage error.
    /// Oversized blocks are logged as diagnostics and rendered anyway.
    pub fn generate(
        &self,
        request: IntentionsRequest,
        catalog: MessageCatalog,
    ) -> Result<Vec<u8>, PipelineError> {
        let tree = varsel_model::build(request, catalog, self.fonts.clone())?;

        let engine = LayoutEngine::new(self.page, self.theme.clone());
        let laid_out = engine.paginate(&tree)?;
        for overflow in &laid_out.overflows {
            log::warn!(
                "Page {}: block height {:.2} exceeds page bound {:.2}",
                overflow.page,
                overflow.block_height,
                overflow.page_bound
            );
        }

        let title = tree.catalog.get(keys::DOCUMENT_TITLE).to_string();
        let renderer = PdfRenderer::new(self.page);
        let bytes = renderer.render(&laid_out, &tree.fonts, &title, &tree.lang)?;
        Ok(bytes)
    }

    /// Convenience entry point for callers holding the form payload as JSON.
    pub fn generate_json(
        &self,
        payload: &str,
        catalog: MessageCatalog,
    ) -> Result<Vec<u8>, PipelineError> {
        let request: IntentionsRequest = serde_json::from_str(payload)?;
        self.generate(request, catalog)
    }
}
