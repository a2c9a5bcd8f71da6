//! Render context, scroll position, and notification types.

use serde::{Deserialize, Serialize};

/// Identifier for a row, assigned by the row-model collaborator.
pub type RowId = u64;

/// The unbuffered row/column index window currently intersecting the viewport.
///
/// Both axes are half-open ranges into the full index space:
/// `first_row_index <= last_row_index <= row_count`, and likewise for columns.
/// Consumers apply buffering (see [`crate::expand_range`]) before use.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderContext {
    pub first_row_index: usize,
    pub last_row_index: usize,
    pub first_column_index: usize,
    pub last_column_index: usize,
}

impl RenderContext {
    /// Context covering `rows` x `columns` in full, used when virtualization
    /// is disabled.
    #[must_use]
    pub fn full(rows: usize, columns: usize) -> Self {
        Self {
            first_row_index: 0,
            last_row_index: rows,
            first_column_index: 0,
            last_column_index: columns,
        }
    }
}

/// Latest observed scroll offsets in pixels.
///
/// Values may transiently be negative during elastic overscroll; negative
/// offsets never drive a position search.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
pub struct ScrollPosition {
    pub top: f32,
    pub left: f32,
}

/// Live size of the scroll container, in pixels.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct ViewportSize {
    pub width: f32,
    pub height: f32,
}

impl ViewportSize {
    /// Create a viewport size, clamping negatives to zero.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }
}

/// Payload of the scroll notification returned on every handled scroll or
/// mount tick, whether or not a new context was committed.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct ScrollParams {
    /// Vertical scroll offset at the time of the event.
    pub top: f32,
    /// Horizontal scroll offset at the time of the event.
    pub left: f32,
    /// Whichever context is now authoritative: the freshly committed one, or
    /// the previously committed one when no threshold was crossed.
    pub render_context: RenderContext,
}

/// Translation applied to the rendered content block so that the buffered
/// first row/column lands at its true pixel position.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
pub struct RenderZoneOffset {
    pub left: f32,
    pub top: f32,
}
