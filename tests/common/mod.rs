pub mod fixtures;
pub mod pdf_assertions;

use lopdf::Document as LopdfDocument;
use serde_json::Value;
use varsel::{FontSpec, FontStyle, InMemoryFontSource, MessageCatalog, PageLayout, Pipeline};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }
}

/// Pipeline wired with in-memory stand-ins for the shipped font files.
/// The bytes are not parseable faces, so measurement uses the registry's
/// fixed approximate metrics; everything stays deterministic.
pub fn test_pipeline() -> Result<Pipeline, Box<dyn std::error::Error>> {
    let fonts = InMemoryFontSource::new();
    fonts.add("fonts/life_savers/LifeSavers_Regular.ttf", b"LSR".to_vec())?;
    fonts.add("fonts/life_savers/LifeSavers_Bold.ttf", b"LSB".to_vec())?;
    fonts.add("fonts/andika_basic/AndikaNewBasic_R.ttf", b"ANR".to_vec())?;
    fonts.add("fonts/andika_basic/AndikaNewBasic_B.ttf", b"ANB".to_vec())?;
    fonts.add("fonts/andika_basic/AndikaNewBasic_I.ttf", b"ANI".to_vec())?;

    let specs = vec![
        FontSpec::new(
            "fonts/life_savers/LifeSavers_Regular.ttf",
            "LifeSavers",
            FontStyle::Normal,
        ),
        FontSpec::new(
            "fonts/life_savers/LifeSavers_Bold.ttf",
            "LifeSavers",
            FontStyle::Bold,
        ),
        FontSpec::new(
            "fonts/andika_basic/AndikaNewBasic_R.ttf",
            "Andika",
            FontStyle::Normal,
        ),
        FontSpec::new(
            "fonts/andika_basic/AndikaNewBasic_B.ttf",
            "Andika",
            FontStyle::Bold,
        ),
        FontSpec::new(
            "fonts/andika_basic/AndikaNewBasic_I.ttf",
            "Andika",
            FontStyle::Italic,
        ),
    ];
    Ok(Pipeline::new(&fonts, &specs, "LifeSavers", "Andika")?)
}

/// Generate a PDF from a JSON payload with the English catalog.
pub fn generate_pdf(request: &Value) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    generate_pdf_with_catalog(request, fixtures::catalog_en())
}

/// Generate a PDF from a JSON payload with a specific catalog.
pub fn generate_pdf_with_catalog(
    request: &Value,
    catalog: MessageCatalog,
) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    let pipeline = test_pipeline()?;
    let bytes = pipeline.generate_json(&serde_json::to_string(request)?, catalog)?;
    GeneratedPdf::from_bytes(bytes)
}

/// Generate a PDF on a specific page geometry.
pub fn generate_pdf_with_page(
    request: &Value,
    page: PageLayout,
) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    let pipeline = test_pipeline()?.with_page_layout(page);
    let bytes = pipeline.generate_json(&serde_json::to_string(request)?, fixtures::catalog_en())?;
    GeneratedPdf::from_bytes(bytes)
}
