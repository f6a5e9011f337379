#![forbid(unsafe_code)]

//! The `LayoutBox` aggregate — content, padding, border, margin, size
//! constraints, and alignment for a single rectangular element.
//!
//! Named `LayoutBox` rather than `Box` to avoid shadowing
//! `std::boxed::Box` at every call site in this workspace.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tui_core::metrics;

use crate::alignment::Alignment;
use crate::size::Size;
use crate::spacing::Spacing;

/// A single rectangular box: non-empty content, padding, an optional
/// border, a margin, size constraints, and an alignment used when the
/// box is placed in a parent.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LayoutBox {
    content: String,
    padding: Spacing,
    margin: Spacing,
    has_border: bool,
    size: Size,
    alignment: Alignment,
}

impl LayoutBox {
    /// A box with `content` and no padding, border, margin, size
    /// constraint, or alignment beyond the defaults.
    ///
    /// # Panics
    /// Panics if `content` is empty — box content is a required field,
    /// not a domain clamp.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        let content = content.into();
        assert!(!content.is_empty(), "LayoutBox content must not be empty");
        Self {
            content,
            padding: Spacing::default(),
            margin: Spacing::default(),
            has_border: false,
            size: Size::unconstrained(),
            alignment: Alignment::default(),
        }
    }

    /// Replace the content.
    ///
    /// # Panics
    /// Panics if `content` is empty.
    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        let content = content.into();
        assert!(!content.is_empty(), "LayoutBox content must not be empty");
        self.content = content;
        self
    }

    /// Set the padding.
    #[must_use]
    pub fn with_padding(mut self, padding: Spacing) -> Self {
        self.padding = padding;
        self
    }

    /// Set the margin.
    #[must_use]
    pub fn with_margin(mut self, margin: Spacing) -> Self {
        self.margin = margin;
        self
    }

    /// Enable or disable the border.
    #[must_use]
    pub fn with_border(mut self, has_border: bool) -> Self {
        self.has_border = has_border;
        self
    }

    /// Set the size constraint.
    #[must_use]
    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Set the alignment used when this box is placed in a parent.
    #[must_use]
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// The content, verbatim.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// The padding.
    #[must_use]
    pub const fn padding(&self) -> Spacing {
        self.padding
    }

    /// The margin.
    #[must_use]
    pub const fn margin(&self) -> Spacing {
        self.margin
    }

    /// Whether a border is drawn.
    #[must_use]
    pub const fn has_border(&self) -> bool {
        self.has_border
    }

    /// The size constraint.
    #[must_use]
    pub const fn size(&self) -> Size {
        self.size
    }

    /// The alignment.
    #[must_use]
    pub const fn alignment(&self) -> Alignment {
        self.alignment
    }

    /// `(width, height)` of the content alone: width is the widest
    /// line's display width, height is the number of lines (content
    /// split on `\n`).
    #[must_use]
    pub fn content_size(&self) -> (u32, u32) {
        let mut height: u32 = 0;
        let mut width: u32 = 0;
        for line in self.content.split('\n') {
            height += 1;
            width = width.max(metrics::display_width(line) as u32);
        }
        (width, height)
    }

    /// `content_size` plus the padding totals.
    #[must_use]
    pub fn padded_size(&self) -> (u32, u32) {
        let (cw, ch) = self.content_size();
        (cw + self.padding.horizontal(), ch + self.padding.vertical())
    }

    /// `padded_size` plus 2 cells on each axis if bordered (1 for each
    /// side's border glyph).
    #[must_use]
    pub fn bordered_size(&self) -> (u32, u32) {
        let (pw, ph) = self.padded_size();
        if self.has_border {
            (pw + 2, ph + 2)
        } else {
            (pw, ph)
        }
    }

    /// `bordered_size` plus the margin totals.
    #[must_use]
    pub fn total_size(&self) -> (u32, u32) {
        let (bw, bh) = self.bordered_size();
        (bw + self.margin.horizontal(), bh + self.margin.vertical())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "must not be empty")]
    fn empty_content_panics() {
        let _ = LayoutBox::new("");
    }

    #[test]
    fn content_size_is_widest_line_and_line_count() {
        let b = LayoutBox::new("hi\nworld!!");
        assert_eq!(b.content_size(), (7, 2));
    }

    #[test]
    fn size_composition_chain() {
        // total_size == content + padding + border glyphs + margin, on
        // each axis. The implicit 1-cell interior padding is a
        // MeasureService concept layered on top of this (see
        // measure.rs's bordered-box test, which has margin 0 and gets
        // (6,5) via the implicit term instead of margin).
        let b = LayoutBox::new("Hi")
            .with_border(true)
            .with_margin(Spacing::all(1));
        assert_eq!(b.content_size(), (2, 1));
        assert_eq!(b.padded_size(), (2, 1));
        assert_eq!(b.bordered_size(), (4, 3));
        assert_eq!(b.total_size(), (6, 5));
    }

    #[test]
    fn plain_box_has_no_extra_size() {
        let b = LayoutBox::new("Hello");
        assert_eq!(b.content_size(), (5, 1));
        assert_eq!(b.total_size(), (5, 1));
    }
}
