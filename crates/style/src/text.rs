use crate::font::FontStyle;

/// Resolved text styling for one block of content.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub family: String,
    pub style: FontStyle,
    pub size: f32,
    pub line_height: f32,
}

impl TextStyle {
    pub fn new(family: impl Into<String>, style: FontStyle, size: f32) -> Self {
        Self {
            family: family.into(),
            style,
            size,
            line_height: size * 1.2,
        }
    }

    pub fn with_line_height(mut self, line_height: f32) -> Self {
        self.line_height = line_height;
        self
    }
}

/// The document's named styles, derived from the two registered family roles.
///
/// Bold and italic variants are opportunistic: the font registry falls back
/// to the normal face when a variant is missing, so a theme may reference
/// them freely.
#[derive(Debug, Clone)]
pub struct Theme {
    pub title: TextStyle,
    pub heading: TextStyle,
    pub body: TextStyle,
    pub strong: TextStyle,
    pub list_item: TextStyle,
    pub footer: TextStyle,
}

impl Theme {
    pub fn new(title_family: &str, body_family: &str) -> Self {
        Self {
            title: TextStyle::new(title_family, FontStyle::Bold, 22.0),
            heading: TextStyle::new(title_family, FontStyle::Bold, 14.0),
            body: TextStyle::new(body_family, FontStyle::Normal, 11.0),
            strong: TextStyle::new(body_family, FontStyle::Bold, 11.0),
            list_item: TextStyle::new(body_family, FontStyle::Normal, 11.0),
            footer: TextStyle::new(body_family, FontStyle::Italic, 9.0),
        }
    }
}
