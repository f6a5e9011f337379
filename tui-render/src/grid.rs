#![forbid(unsafe_code)]

//! A fixed-size character grid used to composite positioned text blocks
//! — the backing store for the flex "last writer wins" overlap rule.

use tui_core::{metrics, Position};
use unicode_segmentation::UnicodeSegmentation;

/// `None` marks a cell covered by the previous column's wide grapheme;
/// it contributes nothing when the row is flattened back to text.
#[derive(Debug, Clone)]
pub(crate) struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Option<String>>,
}

impl Grid {
    pub(crate) fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Some(" ".to_string()); width * height],
        }
    }

    /// Paint `text`'s lines into this grid with their top-left corner at
    /// `pos`. Lines and columns past the grid's edge are silently
    /// dropped — this is the clipping that keeps overflowing flex items
    /// from growing the grid. Later paints win over earlier ones
    /// wherever they overlap.
    pub(crate) fn paint(&mut self, pos: Position, text: &str) {
        for (row_offset, line) in text.split('\n').enumerate() {
            let y = pos.y as usize + row_offset;
            if y >= self.height {
                continue;
            }
            let mut col = pos.x as usize;
            for grapheme in line.graphemes(true) {
                if col >= self.width {
                    break;
                }
                let width = metrics::grapheme_width(grapheme).max(1);
                self.set(col, y, Some(grapheme.to_string()));
                for extra in 1..width {
                    let continuation_col = col + extra;
                    if continuation_col < self.width {
                        self.set(continuation_col, y, None);
                    }
                }
                col += width;
            }
        }
    }

    fn set(&mut self, x: usize, y: usize, value: Option<String>) {
        self.cells[y * self.width + x] = value;
    }

    /// Flatten the grid back to newline-joined rows.
    pub(crate) fn render(&self) -> String {
        let mut lines = Vec::with_capacity(self.height);
        for y in 0..self.height {
            let mut line = String::new();
            for x in 0..self.width {
                if let Some(cell) = &self.cells[y * self.width + x] {
                    line.push_str(cell);
                }
            }
            lines.push(line);
        }
        lines.join("\n")
    }
}
