#![forbid(unsafe_code)]

//! The immutable single-line text input aggregate.

use std::fmt;
use std::sync::Arc;

use tui_core::{Cursor, Selection, metrics};

use crate::error::ValidationError;

/// A pure function from candidate content to an optional rejection
/// reason. Must be pure — the core never invokes it implicitly, and if
/// the supplied closure closes over mutable state, keeping that state
/// consistent under concurrent access is the caller's responsibility.
pub type Validator = Arc<dyn Fn(&str) -> Option<ValidationError> + Send + Sync>;

/// An immutable, grapheme-correct single-line text input.
///
/// Every method that would mutate state instead returns a new
/// `TextInput`; `self` is never modified. All positions are cluster
/// (grapheme) offsets, not byte offsets — see [`tui_core::metrics`].
#[derive(Clone)]
pub struct TextInput {
    content: String,
    cursor: usize,
    selection: Option<Selection>,
    validator: Option<Validator>,
    width: usize,
    scroll_offset: usize,
    placeholder: String,
    focused: bool,
    show_cursor: bool,
}

impl fmt::Debug for TextInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextInput")
            .field("content", &self.content)
            .field("cursor", &self.cursor)
            .field("selection", &self.selection)
            .field("has_validator", &self.validator.is_some())
            .field("width", &self.width)
            .field("scroll_offset", &self.scroll_offset)
            .field("placeholder", &self.placeholder)
            .field("focused", &self.focused)
            .field("show_cursor", &self.show_cursor)
            .finish()
    }
}

impl TextInput {
    /// A new, empty input with the given visible cell width.
    ///
    /// # Panics
    /// Panics if `width == 0` — width is a contract invariant (`>= 1`),
    /// not a domain clamp, so a caller passing 0 has a programmer error.
    #[must_use]
    pub fn new(width: usize) -> Self {
        assert!(width >= 1, "TextInput width must be >= 1, got 0");
        Self {
            content: String::new(),
            cursor: 0,
            selection: None,
            validator: None,
            width,
            scroll_offset: 0,
            placeholder: String::new(),
            focused: false,
            show_cursor: true,
        }
    }

    // -- passive display state builders -------------------------------

    /// Attach a validator. Never invoked implicitly; only `validate`/
    /// `is_valid` call it.
    #[must_use]
    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validator = Some(validator);
        self
    }

    /// Set the placeholder shown when content is empty.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set the visible cell width.
    ///
    /// # Panics
    /// Panics if `width == 0`.
    #[must_use]
    pub fn with_width(mut self, width: usize) -> Self {
        assert!(width >= 1, "TextInput width must be >= 1, got 0");
        self.width = width;
        self
    }

    /// Set the focused flag (host-driven display state only).
    #[must_use]
    pub fn with_focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Set whether the host should render a cursor glyph.
    #[must_use]
    pub fn with_show_cursor(mut self, show_cursor: bool) -> Self {
        self.show_cursor = show_cursor;
        self
    }

    // -- content / cursor / selection mutators -------------------------

    /// Replace the content, clamping the cursor and selection into the
    /// new bounds; drops the selection if it becomes empty.
    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        let max = self.max_cursor();
        self.cursor = self.cursor.min(max);
        self.selection = self.selection.map(|s| s.clamp(max)).filter(|s| !s.is_empty());
        self
    }

    /// Replace the content and place the cursor at `pos` (clamped),
    /// dropping any selection.
    #[must_use]
    pub fn set_content(mut self, content: impl Into<String>, pos: isize) -> Self {
        self.content = content.into();
        let max = self.max_cursor();
        self.cursor = Cursor::new(0, max).move_to(pos, max).get();
        self.selection = None;
        self
    }

    /// Move the cursor to cluster offset `k`, clamped into bounds. Drops
    /// any selection, matching the "after any cursor-moving op, selection
    /// is absent" invariant.
    #[must_use]
    pub fn with_cursor(mut self, k: isize) -> Self {
        let max = self.max_cursor();
        self.cursor = Cursor::new(0, max).move_to(k, max).get();
        self.selection = None;
        self
    }

    /// Select `[min(a,b), max(a,b))`, clamped into bounds, and place the
    /// cursor at the selection's end.
    #[must_use]
    pub fn with_selection(mut self, a: isize, b: isize) -> Self {
        let max = self.max_cursor();
        let selection = Selection::new(a, b).clamp(max);
        self.cursor = selection.end();
        self.selection = Some(selection);
        self
    }

    /// Drop the current selection without moving the cursor.
    #[must_use]
    pub fn clear_selection(mut self) -> Self {
        self.selection = None;
        self
    }

    /// Move the cursor one cluster left, clamped at 0. Drops selection.
    #[must_use]
    pub fn move_left(self) -> Self {
        self.move_cursor_by(-1)
    }

    /// Move the cursor one cluster right, clamped at the content end.
    /// Drops selection.
    #[must_use]
    pub fn move_right(self) -> Self {
        self.move_cursor_by(1)
    }

    /// Move the cursor to the start. Drops selection.
    #[must_use]
    pub fn move_home(mut self) -> Self {
        self.cursor = 0;
        self.selection = None;
        self
    }

    /// Move the cursor to the end. Drops selection.
    #[must_use]
    pub fn move_end(mut self) -> Self {
        self.cursor = self.max_cursor();
        self.selection = None;
        self
    }

    fn move_cursor_by(mut self, delta: isize) -> Self {
        let max = self.max_cursor();
        self.cursor = Cursor::new(self.cursor, max).move_by(delta, max).get();
        self.selection = None;
        self
    }

    /// Insert `ch` before the cluster at the cursor (so inserting at the
    /// end appends). If a selection is active it is deleted first, and
    /// the character is inserted at the resulting cursor position.
    #[must_use]
    pub fn insert_char(self, ch: char) -> Self {
        let mut this = if self.selection.is_some() {
            self.delete_selection()
        } else {
            self
        };
        let byte_offset = metrics::clusters_to_bytes(&this.content, this.cursor);
        this.content.insert(byte_offset, ch);
        this.cursor += 1;
        this
    }

    /// Delete the selection if present; otherwise delete the cluster
    /// immediately before the cursor. No-ops at cursor 0 with no
    /// selection.
    #[must_use]
    pub fn delete_backward(self) -> Self {
        if self.selection.is_some() {
            return self.delete_selection();
        }
        if self.cursor == 0 {
            return self;
        }
        let mut this = self;
        let start = metrics::clusters_to_bytes(&this.content, this.cursor - 1);
        let end = metrics::clusters_to_bytes(&this.content, this.cursor);
        this.content.replace_range(start..end, "");
        this.cursor -= 1;
        this
    }

    /// Delete the selection if present; otherwise delete the cluster at
    /// the cursor. No-ops at the content end with no selection. The
    /// cursor itself does not move.
    #[must_use]
    pub fn delete_forward(self) -> Self {
        if self.selection.is_some() {
            return self.delete_selection();
        }
        let max = self.max_cursor();
        if self.cursor >= max {
            return self;
        }
        let mut this = self;
        let start = metrics::clusters_to_bytes(&this.content, this.cursor);
        let end = metrics::clusters_to_bytes(&this.content, this.cursor + 1);
        this.content.replace_range(start..end, "");
        this
    }

    fn delete_selection(mut self) -> Self {
        let Some(selection) = self.selection else {
            return self;
        };
        let start_byte = metrics::clusters_to_bytes(&self.content, selection.start());
        let end_byte = metrics::clusters_to_bytes(&self.content, selection.end());
        self.content.replace_range(start_byte..end_byte, "");
        self.cursor = selection.start();
        self.selection = None;
        self
    }

    /// Reset to an empty input: content, cursor, selection, and scroll
    /// offset all clear. Display state (placeholder, validator, width,
    /// focused, show_cursor) is preserved.
    #[must_use]
    pub fn clear(mut self) -> Self {
        self.content.clear();
        self.cursor = 0;
        self.selection = None;
        self.scroll_offset = 0;
        self
    }

    /// Select the entire content; if it's empty, drop any selection
    /// instead.
    #[must_use]
    pub fn select_all(mut self) -> Self {
        let max = self.max_cursor();
        if max > 0 {
            self.selection = Some(Selection::new(0, max as isize));
            self.cursor = max;
        } else {
            self.selection = None;
        }
        self
    }

    /// `(before, at, after)` split of the content at the cursor — see
    /// [`tui_core::metrics::split_at_cursor`].
    #[must_use]
    pub fn content_parts(&self) -> (&str, &str, &str) {
        metrics::split_at_cursor(&self.content, self.cursor)
    }

    /// Run the validator against the current content, if one is set.
    #[must_use]
    pub fn validate(&self) -> Option<ValidationError> {
        self.validator.as_ref().and_then(|v| v(&self.content))
    }

    /// `true` if there is no validator, or the validator accepts the
    /// current content.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validate().is_none()
    }

    // -- accessors ------------------------------------------------------

    /// The current content.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// The current cursor cluster offset.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// The current selection, if any.
    #[must_use]
    pub const fn selection(&self) -> Option<Selection> {
        self.selection
    }

    /// The configured visible cell width.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// The current horizontal scroll offset.
    #[must_use]
    pub const fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// The placeholder text.
    #[must_use]
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Whether the input is focused.
    #[must_use]
    pub const fn focused(&self) -> bool {
        self.focused
    }

    /// Whether the host should render a cursor glyph.
    #[must_use]
    pub const fn show_cursor(&self) -> bool {
        self.show_cursor
    }

    fn max_cursor(&self) -> usize {
        metrics::cluster_count(&self.content)
    }
}
