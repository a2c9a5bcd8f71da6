//! Row page and render descriptor types.

use serde::{Deserialize, Serialize};

use super::RowId;

/// One realized row in the current page, in display order.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct RowEntry {
    pub id: RowId,
}

impl RowEntry {
    #[must_use]
    pub fn new(id: RowId) -> Self {
        Self { id }
    }
}

/// Absolute placement of the current page within the full row set.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct RowRange {
    /// Absolute index of the page's first row.
    pub first_row_index: usize,
    /// Absolute index of the page's last row.
    pub last_row_index: usize,
}

/// The ordered row list supplied by the row-model collaborator, plus its
/// placement descriptor.
///
/// A page without a `range` means no row window has been established yet;
/// materialization yields "no rows to render" rather than an error.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct RowPage {
    pub rows: Vec<RowEntry>,
    pub range: Option<RowRange>,
}

impl RowPage {
    #[must_use]
    pub fn new(rows: Vec<RowEntry>, range: Option<RowRange>) -> Self {
        Self { rows, range }
    }

    /// Page holding the entire row set, starting at absolute index 0.
    #[must_use]
    pub fn contiguous(rows: Vec<RowEntry>) -> Self {
        let range = Some(RowRange {
            first_row_index: 0,
            last_row_index: rows.len().saturating_sub(1),
        });
        Self { rows, range }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Effective height for one rendered row.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub enum RowHeight {
    /// Content determines the height; the row has not been measured yet.
    Auto,
    /// Fixed height in pixels.
    Px(f32),
}

/// Everything the rendering collaborator needs to draw one row.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct RowRenderDescriptor {
    pub id: RowId,
    /// Absolute row index (page placement + offset within the page).
    pub index: usize,
    pub height: RowHeight,
    pub selected: bool,
    /// Set on the final row of the page.
    pub is_last_visible: bool,
}

/// Output of the materialization adapter: the buffered window bounds plus one
/// descriptor per row to render. Not retained by the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedRows {
    pub rows: Vec<RowRenderDescriptor>,
    /// Buffered row window, page-relative, half-open.
    pub first_row_index: usize,
    pub last_row_index: usize,
    /// Buffered column window after span resolution, half-open. Render the
    /// visible-column slice `first_column_index..last_column_index`.
    pub first_column_index: usize,
    pub last_column_index: usize,
    /// Width available to lay the columns out in.
    pub container_width: f32,
}
