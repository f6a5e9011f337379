#![forbid(unsafe_code)]

//! Grapheme-aware string metrics and the cursor/selection/position value
//! types that [`tui-text`](https://docs.rs/tui-text) and
//! [`tui-layout`](https://docs.rs/tui-layout) build on.
//!
//! Everything in this crate is a pure function or an immutable value
//! type: no I/O, no terminal handle, no global state.

pub mod cursor;
pub mod metrics;
pub mod position;
pub mod selection;

pub use cursor::Cursor;
pub use position::Position;
pub use selection::Selection;
