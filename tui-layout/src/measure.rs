#![forbid(unsafe_code)]

//! `MeasureService` — natural outer-size derivation.

use tui_core::metrics;

use crate::boxed::LayoutBox;
use crate::size::Size;

/// Computes the natural outer size of a [`LayoutBox`], including the
/// implicit 1-cell-per-side padding a border always reserves so content
/// never touches the border glyphs.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeasureService;

impl MeasureService {
    /// A fresh measure service. Stateless — every call is a pure
    /// function of its argument.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// `(width, height)` of `content` alone: widest line's display width,
    /// number of lines.
    #[must_use]
    pub fn measure_content(&self, content: &str) -> (u32, u32) {
        let mut width = 0u32;
        let mut height = 0u32;
        for line in content.split('\n') {
            height += 1;
            width = width.max(metrics::display_width(line) as u32);
        }
        (width, height)
    }

    /// The natural outer size of `boxed`, with its own size constraint
    /// applied.
    ///
    /// ```text
    /// w = content_w + padding.horizontal + implicit_h + border_h + margin.horizontal
    /// h = content_h + padding.vertical   + implicit_v + border_v + margin.vertical
    /// ```
    /// where `implicit_*` and `border_*` are each `2` if bordered, else
    /// `0`. The implicit term is what keeps content detached from border
    /// glyphs when the caller writes no explicit padding; it is a
    /// measurement-only concept — [`LayoutBox::bordered_size`] does not
    /// include it (only the border glyphs themselves do).
    #[must_use]
    pub fn measure(&self, boxed: &LayoutBox) -> Size {
        let (cw, ch) = self.measure_content(boxed.content());
        let padding = boxed.padding();
        let margin = boxed.margin();
        let border_extra = if boxed.has_border() { 4 } else { 0 }; // implicit (2) + glyphs (2)

        let width = cw + padding.horizontal() + border_extra + margin.horizontal();
        let height = ch + padding.vertical() + border_extra + margin.vertical();

        #[cfg(feature = "tracing")]
        tracing::trace!(width, height, bordered = boxed.has_border(), "measure");

        boxed.size().constrain(width, height)
    }
}
