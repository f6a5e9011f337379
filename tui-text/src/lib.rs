#![forbid(unsafe_code)]

//! An immutable, grapheme-correct single-line text input model.
//!
//! [`TextInput`] is a value type: every editing operation returns a new
//! `TextInput` and leaves its receiver untouched. There is no implicit
//! I/O, no key-binding dispatch, and no host event loop here — this
//! crate owns exactly the Unicode-correct editing semantics; wiring key
//! events to [`TextInput`] methods is the host application's job.

pub mod error;
pub mod input;

pub use error::ValidationError;
pub use input::{TextInput, Validator};
