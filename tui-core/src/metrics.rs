#![forbid(unsafe_code)]

//! Grapheme-cluster-aware string metrics.
//!
//! Every position exposed by this module is a count of Unicode extended
//! grapheme clusters (UAX #29) from the start of a string, not a byte
//! offset and not a `char` count. A family emoji sequence, a flag
//! sequence, or a base character plus combining marks each count as one
//! cluster — this is what makes cursor motion "feel right" over text a
//! terminal renders as a single glyph.
//!
//! # Example
//!
//! ```
//! use tui_core::metrics;
//!
//! assert_eq!(metrics::cluster_count("hello"), 5);
//! assert_eq!(metrics::cluster_count("e\u{0301}"), 1); // e + combining acute
//! assert_eq!(metrics::display_width("你好"), 4); // wide CJK, 2 cells each
//! ```

use unicode_segmentation::UnicodeSegmentation;

/// Number of extended grapheme clusters in `s`. `0` for an empty string.
#[must_use]
pub fn cluster_count(s: &str) -> usize {
    s.graphemes(true).count()
}

/// Byte offset of the start of the `k`-th grapheme cluster.
///
/// `k` is clamped to `[0, cluster_count(s)]` before lookup, so out-of-range
/// input behaves as the nearest valid cluster index rather than panicking.
/// Monotone non-decreasing in `k`.
#[must_use]
pub fn clusters_to_bytes(s: &str, k: usize) -> usize {
    s.grapheme_indices(true)
        .nth(k)
        .map_or(s.len(), |(byte, _)| byte)
}

/// The cluster index whose byte range contains `b`.
///
/// `b >= s.len()` maps to `cluster_count(s)`; any `b` inside a cluster's
/// byte range maps to that cluster's index (never a fractional position).
#[must_use]
pub fn bytes_to_clusters(s: &str, b: usize) -> usize {
    if b >= s.len() {
        return cluster_count(s);
    }
    s.grapheme_indices(true)
        .position(|(byte, g)| b < byte + g.len())
        .unwrap_or_else(|| cluster_count(s))
}

/// Split `s` at cluster position `k` into `(before, at, after)`.
///
/// `before` is the first `k` clusters, `at` is the `k`-th cluster alone
/// (empty if `k` is at or past the end), and `after` is everything past
/// it. `k` clamps into `[0, cluster_count(s)]`.
///
/// Invariant: `before.to_owned() + at + after == s` always.
#[must_use]
pub fn split_at_cursor(s: &str, k: usize) -> (&str, &str, &str) {
    let start = clusters_to_bytes(s, k);
    let end = clusters_to_bytes(s, k + 1);
    (&s[..start], &s[start..end], &s[end..])
}

/// Visual cell width of a single grapheme cluster.
///
/// East-Asian-Wide and emoji clusters are 2 cells; combining-mark-only
/// clusters are 0; everything else is 1. Delegates to
/// `unicode-display-width`, which measures whole grapheme clusters rather
/// than summing per-codepoint widths, so ZWJ emoji sequences and flag
/// sequences report their true single-glyph terminal width instead of the
/// (wrong) sum of their constituent codepoints' widths.
#[must_use]
pub fn grapheme_width(grapheme: &str) -> usize {
    unicode_display_width::width(grapheme).round() as usize
}

/// Visual cell width of `s`: the sum of `grapheme_width` over its clusters.
#[must_use]
pub fn display_width(s: &str) -> usize {
    if s.is_empty() {
        return 0;
    }
    s.graphemes(true).map(grapheme_width).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_is_all_zero() {
        assert_eq!(cluster_count(""), 0);
        assert_eq!(display_width(""), 0);
        assert_eq!(clusters_to_bytes("", 0), 0);
        assert_eq!(bytes_to_clusters("", 0), 0);
        assert_eq!(split_at_cursor("", 0), ("", "", ""));
    }

    #[test]
    fn family_emoji_is_one_cluster() {
        let family = "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}\u{200D}\u{1F466}";
        assert_eq!(cluster_count(family), 1);
    }

    #[test]
    fn combining_sequence_is_one_cluster() {
        assert_eq!(cluster_count("e\u{0301}"), 1);
    }

    #[test]
    fn split_at_cursor_boundaries() {
        let s = "hello";
        assert_eq!(split_at_cursor(s, 0), ("", "h", "ello"));
        assert_eq!(split_at_cursor(s, 5), ("hello", "", ""));
        // k past the end behaves as the end.
        assert_eq!(split_at_cursor(s, 99), ("hello", "", ""));
    }

    #[test]
    fn split_at_cursor_concatenation_law() {
        for s in ["", "hello", "héllo", "你好世界", "a\u{0301}b"] {
            let n = cluster_count(s);
            for k in 0..=n + 1 {
                let (before, at, after) = split_at_cursor(s, k);
                let rejoined = format!("{before}{at}{after}");
                assert_eq!(rejoined, s);
                assert_eq!(cluster_count(before), k.min(n));
            }
        }
    }

    #[test]
    fn round_trip_bytes_clusters() {
        for s in ["hello", "héllo world", "你好", "🇯🇵🇰🇷", ""] {
            let n = cluster_count(s);
            for k in 0..=n {
                let b = clusters_to_bytes(s, k);
                assert_eq!(bytes_to_clusters(s, b), k);
            }
        }
    }

    #[test]
    fn display_width_ascii() {
        assert_eq!(display_width("hello"), 5);
    }

    #[test]
    fn display_width_wide_cjk() {
        assert_eq!(display_width("你好"), 4);
    }
}
