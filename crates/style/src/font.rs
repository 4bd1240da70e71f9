use serde::{Deserialize, Deserializer, Serialize, de};

/// The closed set of font style variants a family can provide.
///
/// `Normal` is the universal fallback: resolving any other variant against a
/// family that only registered `Normal` succeeds with the normal face.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, Default)]
pub enum FontStyle {
    #[default]
    Normal,
    Bold,
    Italic,
    BoldItalic,
}

impl FontStyle {
    /// Parse a font style from a string (e.g. "bold", "bolditalic").
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "normal" | "regular" => Ok(FontStyle::Normal),
            "bold" => Ok(FontStyle::Bold),
            "italic" => Ok(FontStyle::Italic),
            "bolditalic" | "bold-italic" => Ok(FontStyle::BoldItalic),
            _ => Err(format!("Invalid font style: '{}'", s)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FontStyle::Normal => "normal",
            FontStyle::Bold => "bold",
            FontStyle::Italic => "italic",
            FontStyle::BoldItalic => "bolditalic",
        }
    }

    pub fn is_normal(&self) -> bool {
        matches!(self, FontStyle::Normal)
    }
}

impl std::fmt::Display for FontStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FontStyle {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_styles() {
        assert_eq!(FontStyle::parse("normal").unwrap(), FontStyle::Normal);
        assert_eq!(FontStyle::parse("Bold").unwrap(), FontStyle::Bold);
        assert_eq!(FontStyle::parse("italic").unwrap(), FontStyle::Italic);
        assert_eq!(
            FontStyle::parse("bolditalic").unwrap(),
            FontStyle::BoldItalic
        );
        assert_eq!(
            FontStyle::parse("bold-italic").unwrap(),
            FontStyle::BoldItalic
        );
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!(FontStyle::parse("oblique").is_err());
        assert!(FontStyle::parse("").is_err());
    }

    #[test]
    fn test_roundtrip_as_str() {
        for style in [
            FontStyle::Normal,
            FontStyle::Bold,
            FontStyle::Italic,
            FontStyle::BoldItalic,
        ] {
            assert_eq!(FontStyle::parse(style.as_str()).unwrap(), style);
        }
    }
}
