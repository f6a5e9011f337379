#![forbid(unsafe_code)]

//! Public facade over this workspace's text-editing and layout core.
//!
//! `tui` re-exports the stable surface of four crates that each own one
//! concern:
//!
//! - [`tui-core`](tui_core) — grapheme-aware string metrics and the
//!   `Cursor`/`Selection`/`Position` value types.
//! - [`tui-text`](tui_text) — the immutable [`TextInput`] editing model.
//! - [`tui-layout`](tui_layout) — CSS-box-model sizing
//!   ([`MeasureService`]), parent-relative positioning
//!   ([`LayoutService`]), and a two-pass flexbox solver
//!   ([`FlexboxLayoutService`]).
//! - [`tui-render`](tui_render) — plain-text rendering of a laid-out
//!   tree ([`RenderService`]).
//!
//! None of this owns a host event loop, a key-binding map, or styled
//! output — wiring those up, and deciding what to do with the plain
//! text this crate produces, is a host application's job.
//!
//! ```
//! use tui::{LayoutBox, RenderService};
//!
//! let boxed = LayoutBox::new("Hi").with_border(true);
//! let rendered = RenderService::new().render(&boxed);
//! assert_eq!(rendered, "┌────┐\n│ Hi │\n└────┘");
//! ```

pub use tui_core::{cursor, metrics, position, selection};
pub use tui_core::{Cursor, Position, Selection};

pub use tui_text::{error as text_error, input as text_input};
pub use tui_text::{TextInput, ValidationError, Validator};

pub use tui_layout::{
    alignment, boxed, flex, layout_service, measure, node, size, spacing,
};
pub use tui_layout::{
    AlignItems, Alignment, Direction, FlexContainer, FlexboxLayoutService, HorizontalAlignment, JustifyContent,
    LayoutBox, LayoutService, MeasureService, Node, Size, Spacing, VerticalAlignment,
};

pub use tui_render::render_service;
pub use tui_render::RenderService;

/// Glob-importable bundle of the types most call sites reach for.
pub mod prelude {
    pub use crate::{
        AlignItems, Alignment, Cursor, Direction, FlexContainer, FlexboxLayoutService, HorizontalAlignment,
        JustifyContent, LayoutBox, LayoutService, MeasureService, Node, Position, RenderService, Selection, Size,
        Spacing, TextInput, ValidationError, Validator, VerticalAlignment,
    };
}
