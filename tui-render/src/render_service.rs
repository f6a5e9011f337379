#![forbid(unsafe_code)]

//! `RenderService` — turns a [`LayoutBox`]/[`Node`] tree or a laid-out
//! [`FlexContainer`] into plain text.

use tui_core::metrics;
use tui_layout::{FlexContainer, LayoutBox, Node, Spacing};

use crate::grid::Grid;

/// Renders box trees to plain text. Stateless — every call is a pure
/// function of its argument.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderService;

impl RenderService {
    /// A fresh render service.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render a single [`LayoutBox`] to text, outside-in: margin blank
    /// rows/columns, then an optional border, then padding, then
    /// content.
    ///
    /// A border reserves one implicit cell of horizontal gutter on each
    /// side so content never touches the border glyphs even with no
    /// explicit padding — this only affects the content line's inline
    /// spacing, not a separate blank row, so a single-line bordered box
    /// renders as exactly 3 lines (top border, content, bottom border).
    /// Content lines are right-padded to the widest line's display width
    /// only when bordered; an unbordered box renders its content
    /// verbatim.
    #[must_use]
    pub fn render(&self, boxed: &LayoutBox) -> String {
        let content_lines: Vec<&str> = boxed.content().split('\n').collect();
        let inner_width = content_lines
            .iter()
            .map(|line| metrics::display_width(line))
            .max()
            .unwrap_or(0);

        let padding = boxed.padding();
        let bordered = boxed.has_border();
        let gutter = usize::from(bordered);

        let left_pad = padding.left as usize + gutter;
        let right_pad = padding.right as usize + gutter;
        let line_width = inner_width + left_pad + right_pad;

        let mut rows = Vec::new();
        for _ in 0..padding.top {
            rows.push(" ".repeat(line_width));
        }
        for line in &content_lines {
            let content_text = if bordered {
                pad_to_width(line, inner_width)
            } else {
                (*line).to_string()
            };
            if bordered {
                rows.push(format!("{}{}{}", " ".repeat(left_pad), content_text, " ".repeat(right_pad)));
            } else {
                rows.push(content_text);
            }
        }
        for _ in 0..padding.bottom {
            rows.push(" ".repeat(line_width));
        }

        if bordered {
            let top = format!("┌{}┐", "─".repeat(line_width));
            let bottom = format!("└{}┘", "─".repeat(line_width));
            rows = std::iter::once(top)
                .chain(rows.into_iter().map(|r| format!("│{r}│")))
                .chain(std::iter::once(bottom))
                .collect();
        }

        apply_margin(rows, boxed.margin())
    }

    /// Render a [`Node`] and every descendant: the node's own box forms
    /// the base layer, then each child (already positioned, e.g. by
    /// [`tui_layout::LayoutService`]) is painted over it at its recorded
    /// position — the same last-writer-wins grid used by
    /// [`Self::render_flex`].
    #[must_use]
    pub fn render_node(&self, node: &Node) -> String {
        let own = self.render(node.boxed());
        let own_lines: Vec<&str> = own.split('\n').collect();
        let width = own_lines.iter().map(|l| metrics::display_width(l)).max().unwrap_or(0);
        let height = own_lines.len();

        let mut grid = Grid::new(width, height);
        grid.paint(tui_core::Position::origin(), &own);
        for child in node.children() {
            grid.paint(child.position(), &self.render_node(&child));
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(width, height, children = node.children().len(), "render_node");

        grid.render()
    }

    /// Composite a laid-out [`FlexContainer`]'s items onto a
    /// `container_width` by `container_height` grid at their recorded
    /// positions, in item order — later items win where they overlap
    /// earlier ones. Items extending past the grid's edges are clipped.
    #[must_use]
    pub fn render_flex(&self, container: &FlexContainer, container_width: u32, container_height: u32) -> String {
        let mut grid = Grid::new(container_width as usize, container_height as usize);
        for item in container.items() {
            grid.paint(item.position(), &self.render_node(&item));
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(container_width, container_height, item_count = container.items().len(), "render_flex");

        grid.render()
    }
}

fn pad_to_width(line: &str, width: usize) -> String {
    let current = metrics::display_width(line);
    if current >= width {
        line.to_string()
    } else {
        format!("{line}{}", " ".repeat(width - current))
    }
}

fn apply_margin(rows: Vec<String>, margin: Spacing) -> String {
    if margin.is_zero() {
        return rows.join("\n");
    }
    let inner_width = rows.iter().map(|r| metrics::display_width(r)).max().unwrap_or(0);
    let total_width = inner_width + margin.horizontal() as usize;
    let blank = " ".repeat(total_width);

    let mut out = Vec::with_capacity(rows.len() + margin.vertical() as usize);
    for _ in 0..margin.top {
        out.push(blank.clone());
    }
    for row in rows {
        out.push(format!("{}{}{}", " ".repeat(margin.left as usize), row, " ".repeat(margin.right as usize)));
    }
    for _ in 0..margin.bottom {
        out.push(blank.clone());
    }
    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_layout::{Direction, FlexboxLayoutService, JustifyContent};

    #[test]
    fn plain_box_renders_content_verbatim() {
        let boxed = LayoutBox::new("Hello");
        let service = RenderService::new();
        assert_eq!(service.render(&boxed), "Hello");
    }

    #[test]
    fn multiline_plain_box_is_untouched() {
        let boxed = LayoutBox::new("Hi\nworld!!");
        let service = RenderService::new();
        assert_eq!(service.render(&boxed), "Hi\nworld!!");
    }

    #[test]
    fn bordered_box_renders_three_lines() {
        let boxed = LayoutBox::new("Hi").with_border(true);
        let service = RenderService::new();
        let rendered = service.render(&boxed);
        assert_eq!(rendered, "┌────┐\n│ Hi │\n└────┘");
    }

    #[test]
    fn bordered_multiline_box_pads_shorter_lines() {
        let boxed = LayoutBox::new("Hi\nworld!!").with_border(true);
        let service = RenderService::new();
        let rendered = service.render(&boxed);
        assert_eq!(rendered, "┌─────────┐\n│ Hi      │\n│ world!! │\n└─────────┘");
    }

    #[test]
    fn explicit_padding_adds_blank_rows_and_columns() {
        let boxed = LayoutBox::new("Hi").with_border(true).with_padding(Spacing::all(1));
        let service = RenderService::new();
        let rendered = service.render(&boxed);
        let lines: Vec<&str> = rendered.split('\n').collect();
        assert_eq!(lines.len(), 5); // border + pad + content + pad + border
        assert_eq!(lines[0], "┌──────┐");
        assert_eq!(lines[2], "│  Hi  │");
    }

    #[test]
    fn margin_adds_blank_surrounding_rows_and_columns() {
        let boxed = LayoutBox::new("Hi").with_margin(Spacing::all(1));
        let service = RenderService::new();
        let rendered = service.render(&boxed);
        let lines: Vec<&str> = rendered.split('\n').collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "    ");
        assert_eq!(lines[1], " Hi ");
    }

    #[test]
    fn render_node_composites_children_over_their_parent() {
        let tree = Node::new(LayoutBox::new("AAAA"))
            .add_child(Node::new(LayoutBox::new("B")).with_position(tui_core::Position::new(1, 0)));
        let service = RenderService::new();
        assert_eq!(service.render_node(&tree), "ABAA");
    }

    #[test]
    fn render_flex_places_items_at_their_positions() {
        let container = FlexContainer::new(Direction::Row)
            .with_justify_content(JustifyContent::SpaceBetween)
            .add_item(Node::new(LayoutBox::new("aa")))
            .add_item(Node::new(LayoutBox::new("bb")));
        let laid_out = FlexboxLayoutService::new().layout(&container, 10, 1);
        let service = RenderService::new();
        let rendered = service.render_flex(&laid_out, 10, 1);
        assert_eq!(rendered, "aa      bb");
    }
}
