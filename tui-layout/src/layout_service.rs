#![forbid(unsafe_code)]

//! `LayoutService` — parent-relative positioning.

use tui_core::Position;

use crate::alignment::Alignment;
use crate::boxed::LayoutBox;
use crate::measure::MeasureService;
use crate::node::Node;
use crate::size::Size;

/// Positions a [`LayoutBox`] (or a [`Node`] tree) against a parent size.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutService {
    measure: MeasureService,
}

impl LayoutService {
    /// A fresh layout service.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            measure: MeasureService::new(),
        }
    }

    /// The alignment offset for content sized `content` inside a
    /// container sized `parent`.
    #[must_use]
    pub fn calculate_position(
        &self,
        content: (u32, u32),
        parent: (u32, u32),
        alignment: Alignment,
    ) -> Position {
        let (x, y) = alignment.calculate_offsets(content, parent);
        Position::new(x, y)
    }

    /// Clamp `pos` so a box sized `box_size` never extends past a parent
    /// sized `parent_size`: each axis clamps into `[0, max(0, parent -
    /// box)]`.
    #[must_use]
    pub fn clamp_position(&self, pos: Position, box_size: (u32, u32), parent_size: (u32, u32)) -> Position {
        let max_x = parent_size.0.saturating_sub(box_size.0);
        let max_y = parent_size.1.saturating_sub(box_size.1);
        Position::new(pos.x.min(max_x), pos.y.min(max_y))
    }

    /// Measure `boxed` and compute its aligned position within `parent`.
    #[must_use]
    pub fn layout(&self, boxed: &LayoutBox, parent: Size) -> Position {
        let measured = self.measure.measure(boxed);
        let parent_dims = (parent.resolved_width(), parent.resolved_height());
        let content_dims = (measured.resolved_width(), measured.resolved_height());

        #[cfg(feature = "tracing")]
        tracing::trace!(?parent_dims, ?content_dims, "layout");

        self.calculate_position(content_dims, parent_dims, boxed.alignment())
    }

    /// Lay out a whole [`Node`] tree: the root is positioned by
    /// alignment within `parent`; children stack vertically in order,
    /// each offered `(parent.width, parent.height - consumed_height)` as
    /// its own available parent size, with `consumed_height` advancing
    /// by each child's measured height as it's placed. Overflow still
    /// positions a child, clamped to non-negative coordinates.
    #[must_use]
    pub fn layout_node(&self, root: &Node, parent: Size) -> Node {
        let position = self.layout(root.boxed(), parent);
        let parent_dims = (parent.resolved_width(), parent.resolved_height());

        let mut consumed_height: u32 = 0;
        let mut positioned_children = Vec::with_capacity(root.children().len());
        for child in root.children() {
            let remaining_height = parent_dims.1.saturating_sub(consumed_height);
            let child_parent = Size::exact(parent_dims.0, remaining_height);
            let laid_out_child = self.layout_node(&child, child_parent);

            let child_measured = self.measure.measure(laid_out_child.boxed());
            let child_dims = (child_measured.resolved_width(), child_measured.resolved_height());

            let shifted = laid_out_child.position().add(0, i64::from(consumed_height));
            let clamped = self.clamp_position(shifted, child_dims, parent_dims);

            positioned_children.push(laid_out_child.with_position(clamped));
            consumed_height += child_dims.1;
        }

        root.clone().with_position(position).with_children(positioned_children)
    }
}
