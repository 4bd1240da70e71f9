use varsel_style::TextStyle;

/// The kind of an atomic positioned unit of document content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Heading,
    Paragraph,
    ListItem,
    Divider,
}

/// One laid-out line of text. Each line carries its own style, so a block
/// can switch family or face mid-way (a member card's heading line uses the
/// title family, its detail lines the body family).
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub text: String,
    pub width: f32,
    pub style: TextStyle,
}

/// A block positioned on a page. Coordinates are top-down from the page's
/// top-left corner, in points; the renderer flips into PDF space.
#[derive(Debug, Clone)]
pub struct PositionedBlock {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub kind: BlockKind,
    /// Empty for dividers.
    pub lines: Vec<TextLine>,
}

impl PositionedBlock {
    /// An unpositioned text block; the page writer assigns coordinates.
    pub fn text(kind: BlockKind, lines: Vec<TextLine>, width: f32, space_after: f32) -> Self {
        let content_height: f32 = lines.iter().map(|line| line.style.line_height).sum();
        Self {
            x: 0.0,
            y: 0.0,
            width,
            height: content_height + space_after,
            kind,
            lines,
        }
    }

    pub fn divider(width: f32, height: f32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width,
            height,
            kind: BlockKind::Divider,
            lines: Vec::new(),
        }
    }
}

/// A sealed page: an ordered sequence of positioned blocks.
#[derive(Debug, Clone)]
pub struct Page {
    /// 1-based page number.
    pub number: usize,
    pub blocks: Vec<PositionedBlock>,
}

/// The output of one layout pass, ready for the renderer.
#[derive(Debug, Clone)]
pub struct LaidOutDocument {
    pub pages: Vec<Page>,
    /// Non-fatal diagnostics for blocks taller than the page bound.
    pub overflows: Vec<crate::BlockOverflow>,
}

impl LaidOutDocument {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}
