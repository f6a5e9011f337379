#![forbid(unsafe_code)]

//! The `Size` layout-constraint value type.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A layout-size constraint: six fields, each either a non-negative
/// value or the "unset" sentinel (`None`).
///
/// Negative inputs normalize to "unset" rather than erroring — only
/// `min > max` on the same axis is a contract violation (it can never
/// be satisfied, so there is no sensible clamp).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Size {
    width: Option<u32>,
    height: Option<u32>,
    min_width: Option<u32>,
    max_width: Option<u32>,
    min_height: Option<u32>,
    max_height: Option<u32>,
}

fn normalize(v: i64) -> Option<u32> {
    u32::try_from(v).ok()
}

impl Size {
    /// No constraints at all.
    #[must_use]
    pub const fn unconstrained() -> Self {
        Self {
            width: None,
            height: None,
            min_width: None,
            max_width: None,
            min_height: None,
            max_height: None,
        }
    }

    /// An exact size on both axes.
    #[must_use]
    pub fn exact(width: u32, height: u32) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
            ..Self::unconstrained()
        }
    }

    /// Set an exact width. Negative normalizes to unset.
    #[must_use]
    pub fn with_width(mut self, width: i64) -> Self {
        self.width = normalize(width);
        self
    }

    /// Set an exact height. Negative normalizes to unset.
    #[must_use]
    pub fn with_height(mut self, height: i64) -> Self {
        self.height = normalize(height);
        self
    }

    /// Set a minimum width.
    ///
    /// # Panics
    /// Panics if this would make `min_width > max_width`.
    #[must_use]
    pub fn with_min_width(mut self, min_width: i64) -> Self {
        self.min_width = normalize(min_width);
        self.assert_axis_ok_width();
        self
    }

    /// Set a maximum width.
    ///
    /// # Panics
    /// Panics if this would make `min_width > max_width`.
    #[must_use]
    pub fn with_max_width(mut self, max_width: i64) -> Self {
        self.max_width = normalize(max_width);
        self.assert_axis_ok_width();
        self
    }

    /// Set a minimum height.
    ///
    /// # Panics
    /// Panics if this would make `min_height > max_height`.
    #[must_use]
    pub fn with_min_height(mut self, min_height: i64) -> Self {
        self.min_height = normalize(min_height);
        self.assert_axis_ok_height();
        self
    }

    /// Set a maximum height.
    ///
    /// # Panics
    /// Panics if this would make `min_height > max_height`.
    #[must_use]
    pub fn with_max_height(mut self, max_height: i64) -> Self {
        self.max_height = normalize(max_height);
        self.assert_axis_ok_height();
        self
    }

    fn assert_axis_ok_width(&self) {
        if let (Some(min), Some(max)) = (self.min_width, self.max_width) {
            assert!(min <= max, "Size: min_width {min} > max_width {max}");
        }
    }

    fn assert_axis_ok_height(&self) {
        if let (Some(min), Some(max)) = (self.min_height, self.max_height) {
            assert!(min <= max, "Size: min_height {min} > max_height {max}");
        }
    }

    /// The exact width, if set.
    #[must_use]
    pub const fn width(&self) -> Option<u32> {
        self.width
    }

    /// The exact height, if set.
    #[must_use]
    pub const fn height(&self) -> Option<u32> {
        self.height
    }

    /// Resolve a natural size against this constraint: an exact
    /// dimension wins outright; otherwise the natural dimension clamps
    /// into `[min, max]` (sides left unset impose no bound). Returns a
    /// new, fully-resolved `Size` (`width`/`height` both `Some`).
    #[must_use]
    pub fn constrain(&self, natural_width: u32, natural_height: u32) -> Self {
        let width = self.width.unwrap_or_else(|| {
            clamp_opt(natural_width, self.min_width, self.max_width)
        });
        let height = self.height.unwrap_or_else(|| {
            clamp_opt(natural_height, self.min_height, self.max_height)
        });
        Self {
            width: Some(width),
            height: Some(height),
            min_width: self.min_width,
            max_width: self.max_width,
            min_height: self.min_height,
            max_height: self.max_height,
        }
    }

    /// The resolved width, or 0 if never constrained/resolved.
    ///
    /// Intended for use on the output of [`Size::constrain`], where
    /// `width` is always `Some`.
    #[must_use]
    pub fn resolved_width(&self) -> u32 {
        self.width.unwrap_or(0)
    }

    /// The resolved height, or 0 if never constrained/resolved.
    #[must_use]
    pub fn resolved_height(&self) -> u32 {
        self.height.unwrap_or(0)
    }
}

fn clamp_opt(value: u32, min: Option<u32>, max: Option<u32>) -> u32 {
    let value = min.map_or(value, |m| value.max(m));
    max.map_or(value, |m| value.min(m))
}

#[cfg(test)]
mod tests {
    use super::Size;

    #[test]
    fn negative_inputs_normalize_to_unset() {
        let size = Size::unconstrained().with_width(-5);
        assert_eq!(size.width(), None);
    }

    #[test]
    #[should_panic(expected = "min_width")]
    fn min_greater_than_max_panics() {
        let _ = Size::unconstrained().with_min_width(10).with_max_width(5);
    }

    #[test]
    fn exact_size_wins_over_natural() {
        let size = Size::exact(5, 5).constrain(100, 100);
        assert_eq!((size.resolved_width(), size.resolved_height()), (5, 5));
    }

    #[test]
    fn natural_size_clamps_into_min_max() {
        let size = Size::unconstrained()
            .with_min_width(10)
            .with_max_width(20)
            .constrain(3, 0);
        assert_eq!(size.resolved_width(), 10);

        let size = Size::unconstrained()
            .with_min_width(10)
            .with_max_width(20)
            .constrain(50, 0);
        assert_eq!(size.resolved_width(), 20);

        let size = Size::unconstrained()
            .with_min_width(10)
            .with_max_width(20)
            .constrain(15, 0);
        assert_eq!(size.resolved_width(), 15);
    }
}
