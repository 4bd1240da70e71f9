use lopdf::Document as LopdfDocument;
use lopdf::Object;
use lopdf::content::Content;

/// Extract all text content from a PDF document, in content-stream order.
///
/// Reads the `Tj` operands directly; our content streams are uncompressed
/// and WinAnsi-encoded, so this is lossless for Latin-1 text.
pub fn extract_text(doc: &LopdfDocument) -> String {
    let mut text = String::new();
    let pages = doc.get_pages();
    let mut page_ids: Vec<_> = pages.iter().collect();
    page_ids.sort_by_key(|(number, _)| **number);

    for (_, page_id) in page_ids {
        let Ok(bytes) = doc.get_page_content(*page_id) else {
            continue;
        };
        let Ok(content) = Content::decode(&bytes) else {
            continue;
        };
        for operation in content.operations {
            if operation.operator != "Tj" {
                continue;
            }
            if let Some(Object::String(string_bytes, _)) = operation.operands.first() {
                text.extend(string_bytes.iter().map(|&b| b as char));
                text.push('\n');
            }
        }
    }
    text
}

/// BaseFont names of all font objects in the document, sorted.
pub fn extract_font_names(doc: &LopdfDocument) -> Vec<String> {
    let mut fonts = Vec::new();
    for object in doc.objects.values() {
        let Ok(dict) = object.as_dict() else {
            continue;
        };
        let is_font = matches!(
            dict.get(b"Type"),
            Ok(Object::Name(name)) if name.as_slice() == b"Font".as_slice()
        );
        if !is_font {
            continue;
        }
        if let Ok(Object::Name(base_font)) = dict.get(b"BaseFont") {
            fonts.push(String::from_utf8_lossy(base_font).to_string());
        }
    }
    fonts.sort();
    fonts
}

/// Get page dimensions (width, height) in points.
pub fn get_page_dimensions(doc: &LopdfDocument, page_num: u32) -> Option<(f32, f32)> {
    let pages = doc.get_pages();
    let page_id = pages.get(&page_num)?;
    let dict = doc.get_object(*page_id).ok()?.as_dict().ok()?;
    let media_box = dict.get(b"MediaBox").ok()?.as_array().ok()?;
    if media_box.len() < 4 {
        return None;
    }
    let width = media_box[2].as_float().ok()? - media_box[0].as_float().ok()?;
    let height = media_box[3].as_float().ok()? - media_box[1].as_float().ok()?;
    Some((width, height))
}

/// Assert that PDF contains specific text
#[macro_export]
macro_rules! assert_pdf_contains_text {
    ($pdf:expr, $text:expr) => {
        let extracted = $crate::common::pdf_assertions::extract_text(&$pdf.doc);
        assert!(
            extracted.contains($text),
            "PDF should contain '{}', but extracted text was:\n{}",
            $text,
            extracted
        );
    };
}

/// Assert that PDF does NOT contain specific text
#[macro_export]
macro_rules! assert_pdf_not_contains_text {
    ($pdf:expr, $text:expr) => {
        let extracted = $crate::common::pdf_assertions::extract_text(&$pdf.doc);
        assert!(
            !extracted.contains($text),
            "PDF should NOT contain '{}', but it was found in:\n{}",
            $text,
            extracted
        );
    };
}

/// Assert the number of pages in a PDF
#[macro_export]
macro_rules! assert_pdf_page_count {
    ($pdf:expr, $count:expr) => {
        assert_eq!(
            $pdf.page_count(),
            $count,
            "Expected {} pages, got {}",
            $count,
            $pdf.page_count()
        );
    };
}

/// Assert minimum number of pages
#[macro_export]
macro_rules! assert_pdf_min_pages {
    ($pdf:expr, $min:expr) => {
        assert!(
            $pdf.page_count() >= $min,
            "Expected at least {} pages, got {}",
            $min,
            $pdf.page_count()
        );
    };
}

/// Assert that PDF contains a font matching a pattern
#[macro_export]
macro_rules! assert_pdf_has_font {
    ($pdf:expr, $pattern:expr) => {
        let fonts = $crate::common::pdf_assertions::extract_font_names(&$pdf.doc);
        assert!(
            fonts.iter().any(|f| f.contains($pattern)),
            "PDF should contain font matching '{}', fonts found: {:?}",
            $pattern,
            fonts
        );
    };
}
