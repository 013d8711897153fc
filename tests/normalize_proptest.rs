//! Property-based tests for range normalization and analysis.

use proptest::prelude::*;

use framespan::{DiagnosticFlags, FrameIndex, FrameSpan, analyze_frame_ranges, normalize_spans};

fn arb_spans() -> impl Strategy<Value = Vec<FrameSpan>> {
    prop::collection::vec((0u64..500, 0u64..40), 0..12).prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(low, len)| FrameSpan::new(FrameIndex(low), FrameIndex(low + len)).unwrap())
            .collect()
    })
}

fn arb_spans_with_permutation() -> impl Strategy<Value = (Vec<FrameSpan>, Vec<FrameSpan>)> {
    arb_spans().prop_flat_map(|spans| (Just(spans.clone()), Just(spans).prop_shuffle()))
}

proptest! {
    #[test]
    fn normalization_is_idempotent(spans in arb_spans()) {
        let once = normalize_spans(spans);
        let twice = normalize_spans(once.spans.clone());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn normalization_ignores_input_order((original, shuffled) in arb_spans_with_permutation()) {
        prop_assert_eq!(normalize_spans(original), normalize_spans(shuffled));
    }

    #[test]
    fn merged_spans_are_disjoint_and_ascending(spans in arb_spans()) {
        let merged = normalize_spans(spans).spans;
        for pair in merged.windows(2) {
            prop_assert!(pair[0].high.0 + 1 < pair[1].low.0);
        }
    }

    #[test]
    fn merging_never_loses_frames(spans in arb_spans()) {
        let merged = normalize_spans(spans.clone()).spans;
        for span in &spans {
            for frame in [span.low, span.high] {
                prop_assert!(merged.iter().any(|m| m.contains(frame)));
            }
        }
    }

    #[test]
    fn canonical_string_round_trips(spans in arb_spans()) {
        let ranges = normalize_spans(spans);
        let reparsed = analyze_frame_ranges(&ranges.canonical, DiagnosticFlags::default());
        prop_assert_eq!(ranges, reparsed);
    }

    #[test]
    fn pair_tokens_order_their_bounds(a in 0u64..10_000, b in 0u64..10_000) {
        let ranges = analyze_frame_ranges(&format!("{a}-{b}"), DiagnosticFlags::default());
        let expected = FrameSpan::new(FrameIndex(a.min(b)), FrameIndex(a.max(b))).unwrap();
        prop_assert_eq!(ranges.spans, vec![expected]);
    }

    #[test]
    fn analyzer_never_panics_on_arbitrary_text(input in "\\PC*") {
        let _ = analyze_frame_ranges(&input, DiagnosticFlags::default());
    }
}
