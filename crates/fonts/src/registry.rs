use crate::{FontError, FontSource, SharedFontData};
use std::collections::HashMap;
use std::sync::Arc;
use varsel_style::FontStyle;

/// Advance per character, in em units, when a face cannot be parsed.
const APPROX_ADVANCE_EM: f32 = 0.6;
/// Line height factor used when a face carries no usable metrics.
const APPROX_LINE_HEIGHT: f32 = 1.2;
/// Ascent factor used when a face carries no usable metrics.
const APPROX_ASCENT: f32 = 0.8;

/// One `(handle, family, style)` triple supplied at registry construction.
#[derive(Debug, Clone)]
pub struct FontSpec {
    pub handle: String,
    pub family: String,
    pub style: FontStyle,
}

impl FontSpec {
    pub fn new(handle: impl Into<String>, family: impl Into<String>, style: FontStyle) -> Self {
        Self {
            handle: handle.into(),
            family: family.into(),
            style,
        }
    }
}

/// A resolved, renderable font face.
///
/// Holds the raw bytes and answers metric queries. Measurement is
/// deterministic: real glyph advances when the face parses, fixed
/// approximate metrics otherwise, never anything environment-dependent.
pub struct GlyphSource {
    family: String,
    style: FontStyle,
    data: SharedFontData,
}

impl std::fmt::Debug for GlyphSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlyphSource")
            .field("family", &self.family)
            .field("style", &self.style)
            .field("data_len", &self.data.len())
            .finish()
    }
}

impl GlyphSource {
    pub fn family(&self) -> &str {
        &self.family
    }

    pub fn style(&self) -> FontStyle {
        self.style
    }

    pub fn data(&self) -> &SharedFontData {
        &self.data
    }

    /// Creates a lightweight Face view over the font data.
    /// Cheap (parses the header) and avoids self-referential struct issues.
    pub fn as_face(&self) -> Option<ttf_parser::Face<'_>> {
        ttf_parser::Face::parse(&self.data, 0).ok()
    }

    /// Width of `text` at `size`, in points.
    pub fn measure_width(&self, text: &str, size: f32) -> f32 {
        match self.as_face() {
            Some(face) => {
                let upem = face.units_per_em() as f32;
                let mut units = 0.0;
                for c in text.chars() {
                    let advance = face
                        .glyph_index(c)
                        .and_then(|gid| face.glyph_hor_advance(gid))
                        .map(|a| a as f32)
                        .unwrap_or(APPROX_ADVANCE_EM * upem);
                    units += advance;
                }
                units / upem * size
            }
            None => text.chars().count() as f32 * APPROX_ADVANCE_EM * size,
        }
    }

    /// Line height at `size`, in points.
    pub fn line_height(&self, size: f32) -> f32 {
        match self.as_face() {
            Some(face) => {
                let upem = face.units_per_em() as f32;
                let extent =
                    (face.ascender() as f32 - face.descender() as f32 + face.line_gap() as f32)
                        / upem;
                extent * size
            }
            None => APPROX_LINE_HEIGHT * size,
        }
    }

    /// Distance from baseline to line top at `size`, in points.
    pub fn ascent(&self, size: f32) -> f32 {
        match self.as_face() {
            Some(face) => face.ascender() as f32 / face.units_per_em() as f32 * size,
            None => APPROX_ASCENT * size,
        }
    }
}

#[derive(Debug, Clone, Hash, PartialEq, Eq)]
struct FontKey {
    family: String,
    style: FontStyle,
}

impl FontKey {
    fn new(family: &str, style: FontStyle) -> Self {
        Self {
            family: family.to_lowercase(),
            style,
        }
    }
}

/// Registry of named font families and their style variants.
///
/// Populated once before any rendering starts, then treated as an immutable
/// snapshot (the pipeline shares it behind `Arc` and exposes no mutation).
#[derive(Debug, Default)]
pub struct FontRegistry {
    variants: HashMap<FontKey, Arc<GlyphSource>>,
}

impl FontRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads every spec from `source` and registers it.
    ///
    /// Loading is not part of the per-request hot path; a caller may retry
    /// this whole construction on transient I/O failure.
    pub fn from_sources(source: &dyn FontSource, specs: &[FontSpec]) -> Result<Self, FontError> {
        let mut registry = Self::new();
        for spec in specs {
            log::debug!(
                "Loading font '{}' as {} ({}) via {}",
                spec.handle,
                spec.family,
                spec.style,
                source.name()
            );
            let data = source.load(&spec.handle)?;
            registry.register(&spec.family, spec.style, data)?;
        }
        Ok(registry)
    }

    /// Adds one style variant to a family.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateFontVariant` if the `(family, style)` pair is
    /// already registered: a silent overwrite could swap the face a safety
    /// document renders with.
    pub fn register(
        &mut self,
        family: &str,
        style: FontStyle,
        data: SharedFontData,
    ) -> Result<(), FontError> {
        let key = FontKey::new(family, style);
        if self.variants.contains_key(&key) {
            return Err(FontError::DuplicateFontVariant {
                family: family.to_string(),
                style,
            });
        }
        self.variants.insert(
            key,
            Arc::new(GlyphSource {
                family: family.to_string(),
                style,
                data,
            }),
        );
        Ok(())
    }

    /// Resolves a `(family, style)` pair to a renderable face.
    ///
    /// Resolution order: requested style, then the family's normal style,
    /// then `MissingFont`. Generation must abort on `MissingFont` rather
    /// than substitute another family.
    pub fn resolve(&self, family: &str, style: FontStyle) -> Result<Arc<GlyphSource>, FontError> {
        if let Some(found) = self.variants.get(&FontKey::new(family, style)) {
            return Ok(found.clone());
        }
        if !style.is_normal()
            && let Some(normal) = self.variants.get(&FontKey::new(family, FontStyle::Normal))
        {
            log::debug!(
                "Font '{}' has no {} variant, falling back to normal",
                family,
                style
            );
            return Ok(normal.clone());
        }
        Err(FontError::MissingFont {
            family: family.to_string(),
            style,
        })
    }

    /// True if at least one variant of `family` is registered.
    pub fn has_family(&self, family: &str) -> bool {
        self.variants
            .keys()
            .any(|key| key.family == family.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}
