#![forbid(unsafe_code)]

//! `FlexContainer` and `FlexboxLayoutService` — a simplified row/column
//! flexbox with justify + align + gap.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tui_core::Position;

use crate::measure::MeasureService;
use crate::node::Node;
use crate::size::Size;

/// The main axis of a flex container: width for `Row`, height for
/// `Column`. Closed sum type — there is no invalid discriminant to
/// guard against, unlike a string- or integer-coded direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    #[default]
    Row,
    Column,
}

/// Main-axis distribution strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum JustifyContent {
    #[default]
    Start,
    End,
    Center,
    SpaceBetween,
}

/// Cross-axis alignment strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AlignItems {
    #[default]
    Start,
    End,
    Center,
    /// Positions at cross = 0 without resizing the item — true
    /// stretch-to-fill is left as future rendering work (see DESIGN.md).
    Stretch,
}

/// A row or column of [`Node`] items with justify/align/gap, plus an
/// overall size constraint.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FlexContainer {
    direction: Direction,
    justify: JustifyContent,
    align: AlignItems,
    gap: u32,
    items: Vec<Node>,
    size: Size,
}

impl FlexContainer {
    /// An empty container in `direction` with no gap and start/start
    /// justify/align.
    #[must_use]
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            justify: JustifyContent::default(),
            align: AlignItems::default(),
            gap: 0,
            items: Vec::new(),
            size: Size::unconstrained(),
        }
    }

    /// Set the justify-content strategy.
    #[must_use]
    pub fn with_justify_content(mut self, justify: JustifyContent) -> Self {
        self.justify = justify;
        self
    }

    /// Set the align-items strategy.
    #[must_use]
    pub fn with_align_items(mut self, align: AlignItems) -> Self {
        self.align = align;
        self
    }

    /// Set the inter-item gap.
    ///
    /// # Panics
    /// Panics if `gap` is negative.
    #[must_use]
    pub fn with_gap(mut self, gap: i64) -> Self {
        assert!(gap >= 0, "FlexContainer gap must be non-negative, got {gap}");
        self.gap = gap as u32;
        self
    }

    /// Set the container's own size constraint.
    #[must_use]
    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Replace all items.
    #[must_use]
    pub fn with_items(mut self, items: impl IntoIterator<Item = Node>) -> Self {
        self.items = items.into_iter().collect();
        self
    }

    /// Append one item.
    #[must_use]
    pub fn add_item(mut self, item: Node) -> Self {
        self.items.push(item);
        self
    }

    /// The main axis.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// The justify-content strategy.
    #[must_use]
    pub const fn justify_content(&self) -> JustifyContent {
        self.justify
    }

    /// The align-items strategy.
    #[must_use]
    pub const fn align_items(&self) -> AlignItems {
        self.align
    }

    /// The inter-item gap.
    #[must_use]
    pub const fn gap(&self) -> u32 {
        self.gap
    }

    /// The container's size constraint.
    #[must_use]
    pub const fn size(&self) -> Size {
        self.size
    }

    /// An independent, deep copy of the items in order.
    #[must_use]
    pub fn items(&self) -> Vec<Node> {
        self.items.clone()
    }
}

/// The two-pass flexbox solver: measure every item, then position it on
/// the main axis (justify) and cross axis (align) independently.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlexboxLayoutService {
    measure: MeasureService,
}

impl FlexboxLayoutService {
    /// A fresh flexbox layout service.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            measure: MeasureService::new(),
        }
    }

    /// Position every item of `container` within a `container_width` by
    /// `container_height` area, returning a new container with the same
    /// items, each carrying its computed position.
    ///
    /// An empty container is returned unchanged. Overflow is allowed:
    /// items are positioned at their natural sizes even if that exceeds
    /// the container, so they may render past its edges — clipping that
    /// is the grid compositor's job (`tui-render`), not this solver's.
    #[must_use]
    pub fn layout(&self, container: &FlexContainer, container_width: u32, container_height: u32) -> FlexContainer {
        self.layout_with_details(container, container_width, container_height).0
    }

    /// Like [`Self::layout`], but also returns the computed positions and
    /// measured `(width, height)` sizes in item order, for callers (and
    /// tests) that want them without re-walking the container.
    #[must_use]
    pub fn layout_with_details(
        &self,
        container: &FlexContainer,
        container_width: u32,
        container_height: u32,
    ) -> (FlexContainer, Vec<Position>, Vec<(u32, u32)>) {
        let items = container.items();
        if items.is_empty() {
            return (container.clone(), Vec::new(), Vec::new());
        }

        let sizes: Vec<(u32, u32)> = items
            .iter()
            .map(|item| {
                let measured = self.measure.measure(item.boxed());
                (measured.resolved_width(), measured.resolved_height())
            })
            .collect();

        let n = items.len();
        let gap = container.gap();
        let (container_main, container_cross) = match container.direction() {
            Direction::Row => (container_width, container_height),
            Direction::Column => (container_height, container_width),
        };
        let main_of = |(w, h): (u32, u32)| match container.direction() {
            Direction::Row => w,
            Direction::Column => h,
        };
        let cross_of = |(w, h): (u32, u32)| match container.direction() {
            Direction::Row => h,
            Direction::Column => w,
        };

        let main_sizes: Vec<u32> = sizes.iter().copied().map(main_of).collect();
        let cross_sizes: Vec<u32> = sizes.iter().copied().map(cross_of).collect();

        let total_gap = if n > 1 { gap * (n as u32 - 1) } else { 0 };
        let occupied: u32 = main_sizes.iter().sum::<u32>() + total_gap;
        let free = container_main.saturating_sub(occupied);

        let main_positions = main_axis_positions(&main_sizes, gap, free, n, container.justify_content());
        let cross_positions: Vec<u32> = cross_sizes
            .iter()
            .map(|&size| cross_axis_offset(size, container_cross, container.align_items()))
            .collect();

        let mut positions = Vec::with_capacity(n);
        let mut positioned_items = Vec::with_capacity(n);
        for i in 0..n {
            let (x, y) = match container.direction() {
                Direction::Row => (main_positions[i], cross_positions[i]),
                Direction::Column => (cross_positions[i], main_positions[i]),
            };
            let pos = Position::new(x, y);
            positions.push(pos);
            positioned_items.push(items[i].clone().with_position(pos));
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(item_count = n, container_main, container_cross, "flex layout");

        let out = container.clone().with_items(positioned_items);
        (out, positions, sizes)
    }
}

fn main_axis_positions(main_sizes: &[u32], gap: u32, free: u32, n: usize, justify: JustifyContent) -> Vec<u32> {
    let mut positions = vec![0u32; n];
    match justify {
        JustifyContent::Start => {
            let mut pos = 0u32;
            for (i, &size) in main_sizes.iter().enumerate() {
                positions[i] = pos;
                pos += size + gap;
            }
        }
        JustifyContent::End => {
            let mut pos = free;
            for (i, &size) in main_sizes.iter().enumerate() {
                positions[i] = pos;
                pos += size + gap;
            }
        }
        JustifyContent::Center => {
            let mut pos = free / 2;
            for (i, &size) in main_sizes.iter().enumerate() {
                positions[i] = pos;
                pos += size + gap;
            }
        }
        JustifyContent::SpaceBetween => {
            if n <= 1 {
                positions[0] = 0;
            } else {
                let extra = free / (n as u32 - 1);
                let mut pos = 0u32;
                for (i, &size) in main_sizes.iter().enumerate() {
                    positions[i] = pos;
                    pos += size + gap + extra;
                }
            }
        }
    }
    positions
}

fn cross_axis_offset(item_cross: u32, container_cross: u32, align: AlignItems) -> u32 {
    match align {
        AlignItems::Start | AlignItems::Stretch => 0,
        AlignItems::End => container_cross.saturating_sub(item_cross),
        AlignItems::Center => container_cross.saturating_sub(item_cross) / 2,
    }
}
