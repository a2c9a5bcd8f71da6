//! Search module tests
//!
//! Tests for binary and exponential search over cumulative position arrays:
//! first-match tie-breaking, boundary offsets, bracket invariance, and
//! equivalence of the two search strategies on fully measured data.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use gridport::{binary_search, binary_search_slice, exponential_search};
use test_case::test_case;

/// Cumulative positions for uniform items
fn uniform_positions(count: usize, extent: f32) -> Vec<f32> {
    (0..count).map(|i| i as f32 * extent).collect()
}

// =============================================================================
// BINARY SEARCH BASICS
// =============================================================================

#[test_case(0.0, 0; "exact start")]
#[test_case(-50.0, 0; "before start clamps to first index")]
#[test_case(15.0, 1; "inside item 0 resolves to next edge")]
#[test_case(20.0, 1; "exact edge of item 1")]
#[test_case(45.0, 2; "tie resolves to first of equal offsets")]
#[test_case(46.0, 4; "between the duplicates and the last item")]
#[test_case(80.0, 4; "exact last offset")]
#[test_case(81.0, 5; "past the end returns len")]
fn binary_search_lower_bound(offset: f32, expected: usize) {
    let positions = [0.0, 20.0, 45.0, 45.0, 80.0];
    assert_eq!(
        binary_search(offset, &positions),
        Some(expected),
        "binary_search({offset}) over {positions:?}"
    );
}

#[test]
fn binary_search_empty_array_is_none() {
    assert_eq!(binary_search(0.0, &[]), None, "Empty array has no index");
    assert_eq!(
        binary_search_slice(0.0, &[], 0, 0),
        None,
        "Empty array wins over empty slice"
    );
}

#[test]
fn binary_search_empty_slice_returns_slice_start() {
    let positions = uniform_positions(10, 20.0);
    assert_eq!(
        binary_search_slice(55.0, &positions, 4, 4),
        Some(4),
        "Empty bracket should return its start"
    );
}

// =============================================================================
// BRACKET INVARIANCE
// The result must not depend on which correct bracket the search starts from.
// =============================================================================

#[test]
fn binary_search_result_invariant_to_bracketing() {
    let positions = [0.0, 20.0, 45.0, 45.0, 80.0, 120.0, 121.0, 300.0];
    for offset in [-1.0, 0.0, 19.0, 45.0, 100.0, 120.5, 299.0, 301.0] {
        let expected = binary_search(offset, &positions).unwrap();
        for slice_start in 0..=expected {
            for slice_end in expected..=positions.len() {
                assert_eq!(
                    binary_search_slice(offset, &positions, slice_start, slice_end),
                    Some(expected),
                    "offset {offset} bracketed by [{slice_start}, {slice_end}]"
                );
            }
        }
    }
}

#[test]
fn binary_search_is_lower_bound_for_every_offset() {
    let positions = [0.0, 10.0, 10.0, 35.0, 80.0, 80.0, 80.0, 200.0];
    for tenth in -20..2100 {
        let offset = tenth as f32 / 10.0;
        let i = binary_search(offset, &positions).unwrap();
        if i < positions.len() {
            assert!(positions[i] >= offset, "positions[{i}] covers {offset}");
        }
        if i > 0 {
            assert!(
                positions[i - 1] < offset,
                "positions[{}] = {} must stay below {offset}",
                i - 1,
                positions[i - 1]
            );
        }
    }
}

// =============================================================================
// EXPONENTIAL SEARCH
// =============================================================================

#[test]
fn exponential_matches_binary_on_measured_arrays() {
    for count in [1, 2, 3, 17, 100, 1024] {
        let positions = uniform_positions(count, 12.5);
        for tenth in 0..(count * 130) {
            let offset = tenth as f32 / 10.0;
            assert_eq!(
                exponential_search(offset, &positions, 0),
                binary_search(offset, &positions),
                "count {count}, offset {offset}"
            );
        }
    }
}

#[test]
fn exponential_search_empty_array_is_none() {
    assert_eq!(exponential_search(42.0, &[], 0), None);
}

#[test]
fn exponential_search_skips_stale_prefix() {
    // Rows 0-4 measured at 30px; row 5 was estimated at 10px, so offsets for
    // rows 6+ run behind the truth. Searching for an offset past the frontier
    // must land on the recorded array, not on a fixed-height assumption.
    let positions = [0.0, 30.0, 60.0, 90.0, 120.0, 150.0, 160.0, 190.0, 220.0];
    assert_eq!(exponential_search(200.0, &positions, 4), Some(8));
    assert_eq!(exponential_search(155.0, &positions, 4), Some(6));
    // A fixed 30px assumption would have produced index 7 for offset 200.
    assert_ne!(exponential_search(200.0, &positions, 4), Some(7));
}

#[test]
fn exponential_search_offset_past_content_returns_len() {
    let positions = uniform_positions(8, 10.0);
    assert_eq!(exponential_search(1000.0, &positions, 7), Some(8));
}

#[test]
fn exponential_search_large_jump_stays_logarithmic_and_correct() {
    let positions = uniform_positions(100_000, 30.0);
    // Deep target from a low start exercises many doubling steps.
    assert_eq!(
        exponential_search(2_400_000.0, &positions, 10),
        binary_search(2_400_000.0, &positions)
    );
    assert_eq!(binary_search(2_400_000.0, &positions), Some(80_000));
}
