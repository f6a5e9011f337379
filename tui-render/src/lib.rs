#![forbid(unsafe_code)]

//! Plain-text rendering for `tui-layout`'s box and flex trees.
//!
//! This crate owns exactly one concern: turning a measured, positioned
//! tree into the characters a terminal would show. It never styles or
//! colors a cell — that is a concern this workspace deliberately leaves
//! to a host application's own renderer.

mod grid;
pub mod render_service;

pub use render_service::RenderService;
