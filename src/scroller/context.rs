//! Render-context calculation, window expansion, and span resolution.

use crate::config::ScrollerOptions;
use crate::layout::{ColumnPositions, RowPositions};
use crate::source::GridSource;
use crate::types::{RenderContext, RowPage, ScrollPosition, ViewportSize};

/// Apply a symmetric buffer to an index window and clamp it into
/// `[min_first_index, max_last_index]`.
///
/// The result `(start, end)` always satisfies
/// `min_first_index <= start <= end <= max_last_index` for `first <= last`
/// and any buffer.
#[must_use]
pub fn expand_range(
    first_index: usize,
    last_index: usize,
    buffer: usize,
    min_first_index: usize,
    max_last_index: usize,
) -> (usize, usize) {
    if min_first_index > max_last_index {
        return (min_first_index, min_first_index);
    }
    (
        first_index
            .saturating_sub(buffer)
            .clamp(min_first_index, max_last_index),
        last_index
            .saturating_add(buffer)
            .clamp(min_first_index, max_last_index),
    )
}

/// Resolve the first column actually renderable, accounting for spans.
///
/// A cell anchored at an earlier column can span across the nominal first
/// column to render; starting the slice at the nominal index would clip it.
/// Walk every row in the buffered row range and follow reported span anchors
/// to the leftmost one.
#[must_use]
pub fn first_non_spanned_column(
    candidate: usize,
    first_row_to_render: usize,
    last_row_to_render: usize,
    page: &RowPage,
    source: &dyn GridSource,
) -> usize {
    let mut first = candidate;
    for entry in page
        .rows
        .iter()
        .take(last_row_to_render)
        .skip(first_row_to_render)
    {
        if let Some(anchor) = source.covering_span_anchor(entry.id, candidate) {
            first = first.min(anchor);
        }
    }
    first
}

/// Compute the unbuffered row/column window intersecting the viewport.
///
/// Row indexes come from the frontier-aware nearest-index search; column
/// indexes from a plain binary search over the column positions. Horizontal
/// windowing is skipped while any row in the buffered candidate range still
/// has auto height, since column content can change a height that has not
/// been measured yet.
#[must_use]
pub fn compute_render_context(
    scroll: ScrollPosition,
    viewport: ViewportSize,
    rows: &RowPositions,
    page: &RowPage,
    columns: &ColumnPositions,
    options: &ScrollerOptions,
    source: &dyn GridSource,
) -> RenderContext {
    if options.disable_virtualization {
        return RenderContext::full(page.len(), columns.len());
    }

    let row_count = page.len();

    // The search may return an index one past the end; clamp it back to a
    // valid row. The last index needs no such clamp because the range is
    // half-open.
    let first_raw = rows
        .nearest_index(scroll.top)
        .unwrap_or(0)
        .min(rows.len().saturating_sub(1));

    let last_raw = if options.auto_height {
        first_raw.saturating_add(row_count)
    } else {
        rows.nearest_index(scroll.top + viewport.height).unwrap_or(0)
    };

    // The row set can shrink between the event that produced `scroll` and
    // this computation; bound both edges against the current count here, not
    // only in the buffered expansion.
    let last_row_index = last_raw.min(row_count);
    let first_row_index = first_raw.min(last_row_index);

    let (first_row_to_render, last_row_to_render) = expand_range(
        first_row_index,
        last_row_index,
        options.row_buffer,
        0,
        row_count,
    );

    let mut has_row_with_auto_height = false;
    for entry in page
        .rows
        .iter()
        .take(last_row_to_render)
        .skip(first_row_to_render)
    {
        if source.row_has_auto_height(entry.id) {
            has_row_with_auto_height = true;
            break;
        }
    }

    let (first_column_index, last_column_index) = if has_row_with_auto_height {
        log::trace!(
            "auto-height row in [{first_row_to_render}, {last_row_to_render}); rendering all columns"
        );
        (0, columns.len())
    } else {
        (
            columns.column_at(scroll.left).unwrap_or(0),
            columns
                .column_at(scroll.left + viewport.width)
                .unwrap_or(0),
        )
    };

    RenderContext {
        first_row_index,
        last_row_index,
        first_column_index,
        last_column_index,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::types::RowEntry;

    struct FixedRows;

    impl GridSource for FixedRows {
        fn row_height(&self, _id: crate::types::RowId) -> f32 {
            30.0
        }
    }

    fn uniform_rows(count: usize, extent: f32) -> RowPositions {
        let positions = (0..count).map(|i| i as f32 * extent).collect();
        RowPositions::new(positions, count as f32 * extent)
    }

    fn uniform_columns(count: usize, extent: f32) -> ColumnPositions {
        let positions = (0..count).map(|i| i as f32 * extent).collect();
        ColumnPositions::new(positions, count as f32 * extent)
    }

    fn page_of(count: usize) -> RowPage {
        RowPage::contiguous((0..count as u64).map(RowEntry::new).collect())
    }

    #[test]
    fn expand_clamps_both_edges() {
        assert_eq!(expand_range(100, 120, 2, 0, 10_000), (98, 122));
        assert_eq!(expand_range(1, 3, 5, 0, 100), (0, 8));
        assert_eq!(expand_range(95, 99, 10, 0, 100), (85, 100));
        assert_eq!(expand_range(0, 0, 0, 0, 0), (0, 0));
    }

    #[test]
    fn expand_with_inverted_bounds_degenerates() {
        assert_eq!(expand_range(5, 10, 2, 8, 3), (8, 8));
    }

    #[test]
    fn shrunk_row_set_cannot_escape_bounds() {
        let rows = uniform_rows(1000, 30.0);
        // The page shrank to 50 rows while positions still describe 1000.
        let page = page_of(50);
        let context = compute_render_context(
            ScrollPosition {
                top: 15_000.0,
                left: 0.0,
            },
            ViewportSize::new(800.0, 600.0),
            &rows,
            &page,
            &uniform_columns(10, 80.0),
            &ScrollerOptions::default(),
            &FixedRows,
        );
        assert!(context.last_row_index <= 50);
        assert!(context.first_row_index <= context.last_row_index);
    }
}
