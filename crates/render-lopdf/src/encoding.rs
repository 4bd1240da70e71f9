//! WinAnsi (CP1252) text encoding for content streams.

/// Encodes text as WinAnsi bytes. Latin-1 maps through directly; the
/// CP1252-specific 0x80–0x9F punctuation block is remapped; anything else
/// degrades to '?' rather than aborting a safety document over one glyph.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars().map(win_ansi_byte).collect()
}

fn win_ansi_byte(c: char) -> u8 {
    match c {
        '\u{20}'..='\u{7E}' => c as u8,
        '\u{A0}'..='\u{FF}' => c as u8,
        '\u{20AC}' => 0x80, // euro sign
        '\u{2018}' => 0x91, // left single quote
        '\u{2019}' => 0x92, // right single quote
        '\u{201C}' => 0x93, // left double quote
        '\u{201D}' => 0x94, // right double quote
        '\u{2022}' => 0x95, // bullet
        '\u{2013}' => 0x96, // en dash
        '\u{2014}' => 0x97, // em dash
        '\u{2026}' => 0x85, // ellipsis
        '\u{0152}' => 0x8C, // OE ligature
        '\u{0153}' => 0x9C, // oe ligature
        _ => b'?',
    }
}
