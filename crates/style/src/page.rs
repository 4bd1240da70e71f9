//! Page geometry: size, margins and the content box the layout engine fills.

use serde::{Deserialize, Serialize};
use varsel_types::Rect;

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub enum PageSize {
    #[default]
    A4,
    Letter,
    Custom {
        width: f32,
        height: f32,
    },
}

impl PageSize {
    /// Page width in PostScript points.
    pub fn width(&self) -> f32 {
        match self {
            PageSize::A4 => 595.28,
            PageSize::Letter => 612.0,
            PageSize::Custom { width, .. } => *width,
        }
    }

    /// Page height in PostScript points.
    pub fn height(&self) -> f32 {
        match self {
            PageSize::A4 => 841.89,
            PageSize::Letter => 792.0,
            PageSize::Custom { height, .. } => *height,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Margins {
    pub fn uniform(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }
}

impl Default for Margins {
    fn default() -> Self {
        // 54pt = 3/4 inch, enough for printers that clip edges
        Self::uniform(54.0)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PageLayout {
    #[serde(default)]
    pub size: PageSize,
    #[serde(default)]
    pub margins: Margins,
}

impl PageLayout {
    /// The content box: the area of one page the layout engine may fill.
    pub fn content_bounds(&self) -> Rect {
        Rect::new(
            self.margins.left,
            self.margins.top,
            self.content_width(),
            self.content_height(),
        )
    }

    pub fn content_width(&self) -> f32 {
        (self.size.width() - self.margins.left - self.margins.right).max(0.0)
    }

    /// The page bound: maximum content height before a new page starts.
    pub fn content_height(&self) -> f32 {
        (self.size.height() - self.margins.top - self.margins.bottom).max(0.0)
    }
}
