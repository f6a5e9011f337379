//! Property tests covering round-trip of index conversions and the
//! concatenation law of `split_at_cursor` under arbitrary input.

use proptest::prelude::*;
use tui_core::metrics;

proptest! {
    #[test]
    fn round_trip_of_index_conversions(s in "\\PC{0,40}") {
        let n = metrics::cluster_count(&s);
        for k in 0..=n {
            let b = metrics::clusters_to_bytes(&s, k);
            prop_assert_eq!(metrics::bytes_to_clusters(&s, b), k);
        }
    }

    #[test]
    fn concatenation_law_of_split(s in "\\PC{0,40}", k in 0usize..60) {
        let (before, at, after) = metrics::split_at_cursor(&s, k);
        let rejoined = format!("{before}{at}{after}");
        prop_assert_eq!(rejoined, s.clone());
        let n = metrics::cluster_count(&s);
        prop_assert_eq!(metrics::cluster_count(before), k.min(n));
    }

    #[test]
    fn display_width_is_non_negative_and_monotone_in_length(s in "\\PC{0,40}", extra in "[a-zA-Z]{0,10}") {
        let base = metrics::display_width(&s);
        let combined = metrics::display_width(&format!("{s}{extra}"));
        prop_assert!(combined >= base);
    }
}
