//! Greedy width-based line wrapping.

use crate::LayoutError;
use crate::block::TextLine;
use varsel_fonts::FontRegistry;
use varsel_style::TextStyle;

/// Wraps one run of text into lines no wider than `max_width`.
///
/// Splits on whitespace; a single word wider than the line is placed on its
/// own line rather than hyphenated. Embedded newlines force breaks.
pub fn wrap_run(
    text: &str,
    style: &TextStyle,
    fonts: &FontRegistry,
    max_width: f32,
) -> Result<Vec<TextLine>, LayoutError> {
    let face = fonts.resolve(&style.family, style.style)?;
    let space_width = face.measure_width(" ", style.size);

    let mut lines = Vec::new();
    for raw_line in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0.0;

        for word in raw_line.split_whitespace() {
            let word_width = face.measure_width(word, style.size);
            let needed = if current.is_empty() {
                word_width
            } else {
                space_width + word_width
            };

            if !current.is_empty() && current_width + needed > max_width {
                lines.push(TextLine {
                    text: std::mem::take(&mut current),
                    width: current_width,
                    style: style.clone(),
                });
                current_width = 0.0;
            }

            if current.is_empty() {
                current.push_str(word);
                current_width = word_width;
            } else {
                current.push(' ');
                current.push_str(word);
                current_width += space_width + word_width;
            }
        }

        if !current.is_empty() {
            lines.push(TextLine {
                text: current,
                width: current_width,
                style: style.clone(),
            });
        }
    }
    Ok(lines)
}
