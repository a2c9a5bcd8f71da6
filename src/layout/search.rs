//! Pure search functions over sorted offset arrays.
//!
//! `positions[i]` is the pixel offset where item `i` begins, so locating the
//! item covering a scroll offset is a lower-bound search. Arrays are
//! non-decreasing; equal neighbors happen when items have zero extent
//! (hidden rows/columns).

/// Find the smallest index whose offset is `>= offset`.
///
/// Returns `None` only when `positions` is empty. Offsets beyond the last
/// position yield `Some(len)`; callers treat that as "past the end" the same
/// way a slice operation would.
#[must_use]
pub fn binary_search(offset: f32, positions: &[f32]) -> Option<usize> {
    binary_search_slice(offset, positions, 0, positions.len())
}

/// [`binary_search`] restricted to the half-open bracket
/// `[slice_start, slice_end)`.
///
/// An empty bracket returns `Some(slice_start)`. Equal offsets resolve to the
/// first matching index: the search keeps narrowing into the left half while
/// `offset <= positions[pivot]`.
#[must_use]
pub fn binary_search_slice(
    offset: f32,
    positions: &[f32],
    slice_start: usize,
    slice_end: usize,
) -> Option<usize> {
    if positions.is_empty() {
        return None;
    }

    let mut lo = slice_start;
    let mut hi = slice_end.min(positions.len());
    if lo >= hi {
        return Some(slice_start);
    }

    while lo < hi {
        let pivot = lo + (hi - lo) / 2;
        let item = positions.get(pivot).copied().unwrap_or(f32::INFINITY);
        if offset <= item {
            hi = pivot;
        } else {
            lo = pivot + 1;
        }
    }

    Some(lo)
}

/// Search an array whose prefix up to `start_index` is known not to reach
/// `offset`, doubling the step until a position outpaces the target, then
/// binary-searching the final bracket.
///
/// Runs in O(log k) where k is the distance from `start_index` to the
/// answer. Used when offsets past the measured frontier are estimates: the
/// early region is already known-invalid and a full-array binary search
/// would waste its comparisons there.
#[must_use]
pub fn exponential_search(offset: f32, positions: &[f32], start_index: usize) -> Option<usize> {
    let len = positions.len();
    let mut interval: usize = 1;
    let mut index = start_index;

    while index < len && positions.get(index).copied().unwrap_or(f32::INFINITY) < offset {
        index = index.saturating_add(interval);
        interval = interval.saturating_mul(2);
    }

    binary_search_slice(offset, positions, index / 2, index.min(len))
}
