#![forbid(unsafe_code)]

//! CSS-box-model sizing, parent-relative positioning, and a two-pass
//! flexbox solver, built on the Unicode-aware text metrics in
//! `tui-core`.
//!
//! This crate answers "how big is it" ([`MeasureService`]) and "where
//! does it go" ([`LayoutService`], [`FlexboxLayoutService`]) for a tree
//! of [`LayoutBox`]es ([`Node`]). It never renders a single cell — that
//! is `tui-render`'s job.

pub mod alignment;
pub mod boxed;
pub mod flex;
pub mod layout_service;
pub mod measure;
pub mod node;
pub mod size;
pub mod spacing;

pub use alignment::{Alignment, HorizontalAlignment, VerticalAlignment};
pub use boxed::LayoutBox;
pub use flex::{AlignItems, Direction, FlexContainer, FlexboxLayoutService, JustifyContent};
pub use layout_service::LayoutService;
pub use measure::MeasureService;
pub use node::Node;
pub use size::Size;
pub use spacing::Spacing;
