use crate::{RenderError, encode_win_ansi, flip_y};
use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, StringFormat, dictionary};
use std::io::Cursor;
use std::sync::Arc;
use varsel_fonts::{FontRegistry, GlyphSource};
use varsel_layout::{BlockKind, LaidOutDocument, Page};
use varsel_style::{FontStyle, PageLayout, TextStyle};

const DIVIDER_LINE_WIDTH: f32 = 0.5;
const DIVIDER_GRAY: f32 = 0.6;

/// One font face referenced by emitted content, with its resource name.
/// Faces are collected in first-use order so resource names, and with them
/// the output bytes, are stable across runs.
struct FontUse {
    key: (String, FontStyle),
    name: String,
    source: Arc<GlyphSource>,
}

/// Renders laid-out pages into a PDF byte sequence.
pub struct PdfRenderer {
    page: PageLayout,
}

impl PdfRenderer {
    pub fn new(page: PageLayout) -> Self {
        Self { page }
    }

    /// Serializes the document. Only fonts actually used by emitted blocks
    /// are embedded; a failure returns no partial output.
    pub fn render(
        &self,
        doc: &LaidOutDocument,
        fonts: &FontRegistry,
        title: &str,
        lang: &str,
    ) -> Result<Vec<u8>, RenderError> {
        let page_width = self.page.size.width();
        let page_height = self.page.size.height();

        let mut pdf = Document::with_version("1.7");
        let pages_id = pdf.new_object_id();

        let mut used: Vec<FontUse> = Vec::new();
        let mut content_ids = Vec::new();
        for page in &doc.pages {
            let content = page_content(page, fonts, &mut used, page_height)?;
            let encoded = content.encode()?;
            content_ids.push(pdf.add_object(Stream::new(dictionary! {}, encoded)));
        }

        let resources_id = write_font_resources(&mut pdf, &used);

        let mut page_ids = Vec::new();
        for content_id in content_ids {
            let page_id = pdf.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![0.0.into(), 0.0.into(), page_width.into(), page_height.into()],
                "Contents" => content_id,
                "Resources" => resources_id,
            });
            page_ids.push(page_id);
        }

        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => page_ids.iter().map(|id| Object::Reference(*id)).collect::<Vec<_>>(),
            "Count" => page_ids.len() as i64,
        };
        pdf.objects.insert(pages_id, pages_dict.into());

        let catalog_id = pdf.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
            "Lang" => Object::String(lang.as_bytes().to_vec(), StringFormat::Literal),
        });
        // No creation date: timestamps would break byte determinism.
        let info_id = pdf.add_object(dictionary! {
            "Title" => Object::String(encode_win_ansi(title), StringFormat::Literal),
            "Producer" => Object::String(b"varsel".to_vec(), StringFormat::Literal),
        });
        pdf.trailer.set("Root", catalog_id);
        pdf.trailer.set("Info", info_id);

        log::debug!(
            "Rendering {} page(s) with {} embedded font(s)",
            doc.page_count(),
            used.len()
        );

        let mut cursor = Cursor::new(Vec::new());
        pdf.save_to(&mut cursor)?;
        Ok(cursor.into_inner())
    }
}

fn page_content(
    page: &Page,
    fonts: &FontRegistry,
    used: &mut Vec<FontUse>,
    page_height: f32,
) -> Result<Content, RenderError> {
    let mut operations = Vec::new();
    for block in &page.blocks {
        if block.kind == BlockKind::Divider {
            let y = flip_y(block.y + block.height / 2.0, page_height);
            operations.extend([
                Operation::new("q", vec![]),
                Operation::new("w", vec![DIVIDER_LINE_WIDTH.into()]),
                Operation::new("G", vec![DIVIDER_GRAY.into()]),
                Operation::new("m", vec![block.x.into(), y.into()]),
                Operation::new("l", vec![(block.x + block.width).into(), y.into()]),
                Operation::new("S", vec![]),
                Operation::new("Q", vec![]),
            ]);
            continue;
        }

        let mut offset = 0.0;
        for line in &block.lines {
            let index = font_use(fonts, used, &line.style)?;
            let font = &used[index];
            let baseline = block.y + offset + font.source.ascent(line.style.size);
            operations.extend([
                Operation::new("BT", vec![]),
                Operation::new(
                    "Tf",
                    vec![
                        Object::Name(font.name.clone().into_bytes()),
                        line.style.size.into(),
                    ],
                ),
                Operation::new(
                    "Td",
                    vec![block.x.into(), flip_y(baseline, page_height).into()],
                ),
                Operation::new(
                    "Tj",
                    vec![Object::String(
                        encode_win_ansi(&line.text),
                        StringFormat::Literal,
                    )],
                ),
                Operation::new("ET", vec![]),
            ]);
            offset += line.style.line_height;
        }
    }
    Ok(Content { operations })
}

/// Resolves the face for a style and returns the index of its `FontUse`
/// entry, registering it on first use. Resolution goes through the registry
/// so a bold style that fell back to the normal face shares its entry.
fn font_use(
    fonts: &FontRegistry,
    used: &mut Vec<FontUse>,
    style: &TextStyle,
) -> Result<usize, RenderError> {
    let source = fonts.resolve(&style.family, style.style)?;
    let key = (source.family().to_lowercase(), source.style());
    if let Some(index) = used.iter().position(|u| u.key == key) {
        return Ok(index);
    }
    let name = format!("F{}", used.len() + 1);
    used.push(FontUse { key, name, source });
    Ok(used.len() - 1)
}

fn write_font_resources(pdf: &mut Document, used: &[FontUse]) -> ObjectId {
    let mut font_dict = Dictionary::new();
    for font in used {
        let data = font.source.data();
        let file_id = pdf.add_object(Stream::new(
            dictionary! { "Length1" => data.len() as i64 },
            data.as_ref().clone(),
        ));

        let ps_name = styled_font_name(font.source.family(), font.source.style());
        let metrics = DescriptorMetrics::of(&font.source);
        let descriptor_id = pdf.add_object(dictionary! {
            "Type" => "FontDescriptor",
            "FontName" => Object::Name(ps_name.clone().into_bytes()),
            "Flags" => metrics.flags,
            "FontBBox" => metrics.bbox.iter().map(|v| (*v).into()).collect::<Vec<Object>>(),
            "ItalicAngle" => metrics.italic_angle,
            "Ascent" => metrics.ascent,
            "Descent" => metrics.descent,
            "CapHeight" => metrics.cap_height,
            "StemV" => 80,
            "FontFile2" => file_id,
        });

        let font_id = pdf.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "TrueType",
            "BaseFont" => Object::Name(ps_name.into_bytes()),
            "Encoding" => "WinAnsiEncoding",
            "FontDescriptor" => descriptor_id,
        });
        font_dict.set(font.name.as_bytes(), font_id);
    }
    pdf.add_object(dictionary! { "Font" => font_dict })
}

/// PDF font name with style suffix, e.g. `Andika-BoldItalic`.
fn styled_font_name(family: &str, style: FontStyle) -> String {
    let mut name = family.replace(' ', "");
    match style {
        FontStyle::Normal => {}
        FontStyle::Bold => name.push_str("-Bold"),
        FontStyle::Italic => name.push_str("-Italic"),
        FontStyle::BoldItalic => name.push_str("-BoldItalic"),
    }
    name
}

/// FontDescriptor values in 1000-unit text space, with fixed defaults when
/// the face does not parse.
struct DescriptorMetrics {
    flags: i64,
    bbox: [f32; 4],
    italic_angle: f32,
    ascent: f32,
    descent: f32,
    cap_height: f32,
}

impl DescriptorMetrics {
    fn of(source: &GlyphSource) -> Self {
        let italic = matches!(source.style(), FontStyle::Italic | FontStyle::BoldItalic);
        let flags = if italic { 32 | 64 } else { 32 };
        let italic_angle = if italic { -12.0 } else { 0.0 };

        match source.as_face() {
            Some(face) => {
                let scale = 1000.0 / face.units_per_em() as f32;
                let ascent = face.ascender() as f32 * scale;
                let descent = face.descender() as f32 * scale;
                let bbox = face.global_bounding_box();
                Self {
                    flags,
                    bbox: [
                        bbox.x_min as f32 * scale,
                        bbox.y_min as f32 * scale,
                        bbox.x_max as f32 * scale,
                        bbox.y_max as f32 * scale,
                    ],
                    italic_angle,
                    ascent,
                    descent,
                    cap_height: face
                        .capital_height()
                        .map(|h| h as f32 * scale)
                        .unwrap_or(ascent),
                }
            }
            None => Self {
                flags,
                bbox: [-100.0, -250.0, 1100.0, 900.0],
                italic_angle,
                ascent: 800.0,
                descent: -200.0,
                cap_height: 700.0,
            },
        }
    }
}
