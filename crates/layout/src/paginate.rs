//! The per-page state machine.
//!
//! A page is open while content fits; pushing a block that would exceed the
//! bound seals the page and retries the block on a fresh one. A single
//! block taller than the bound is placed anyway and recorded as a
//! [`BlockOverflow`] diagnostic, never an error.

use crate::block::{LaidOutDocument, Page, PositionedBlock};
use varsel_types::Rect;

// Epsilon to absorb floating point inaccuracies in accumulated heights
const EPSILON: f32 = 0.01;

/// Non-fatal diagnostic: a single block exceeded the page bound.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockOverflow {
    /// 1-based number of the page the block was placed on.
    pub page: usize,
    pub block_height: f32,
    pub page_bound: f32,
}

pub struct BreakAnalysis {
    pub should_break: bool,
    pub remaining_height: f32,
}

/// Centralized check whether a block fits in the remaining page space.
pub fn check_block_fit(cursor_y: f32, block_height: f32, bound: f32) -> BreakAnalysis {
    let available = (bound - cursor_y).max(0.0);
    BreakAnalysis {
        should_break: block_height > available + EPSILON,
        remaining_height: available,
    }
}

/// Accumulates positioned blocks into sealed pages.
pub struct PageWriter {
    bounds: Rect,
    cursor_y: f32,
    current: Vec<PositionedBlock>,
    pages: Vec<Page>,
    overflows: Vec<BlockOverflow>,
}

impl PageWriter {
    /// `bounds` is the content box of one page; its height is the page
    /// bound.
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            cursor_y: 0.0,
            current: Vec::new(),
            pages: Vec::new(),
            overflows: Vec::new(),
        }
    }

    fn current_page_number(&self) -> usize {
        self.pages.len() + 1
    }

    /// Appends a block, breaking to a new page first when it does not fit.
    pub fn push(&mut self, mut block: PositionedBlock) {
        let fit = check_block_fit(self.cursor_y, block.height, self.bounds.height);
        if fit.should_break && !self.current.is_empty() {
            self.seal();
        }

        if block.height > self.bounds.height + EPSILON {
            log::warn!(
                "Block of height {:.2} exceeds the page bound {:.2} on page {}; rendering with overflow",
                block.height,
                self.bounds.height,
                self.current_page_number()
            );
            self.overflows.push(BlockOverflow {
                page: self.current_page_number(),
                block_height: block.height,
                page_bound: self.bounds.height,
            });
        }

        block.x = self.bounds.x;
        block.y = self.bounds.y + self.cursor_y;
        self.cursor_y += block.height;
        self.current.push(block);
    }

    /// Seals the open page. Sealed pages are never mutated again.
    fn seal(&mut self) {
        let blocks = std::mem::take(&mut self.current);
        self.pages.push(Page {
            number: self.current_page_number(),
            blocks,
        });
        self.cursor_y = 0.0;
    }

    /// Seals the last open page and returns the finished document.
    pub fn finish(mut self) -> LaidOutDocument {
        if !self.current.is_empty() || self.pages.is_empty() {
            self.seal();
        }
        LaidOutDocument {
            pages: self.pages,
            overflows: self.overflows,
        }
    }
}
