//! Cumulative position indexes for rows and columns.

use serde::{Deserialize, Serialize};

use crate::error::{GridportError, Result};

use super::{binary_search, exponential_search};

/// How far measurement has progressed through the row set.
///
/// Rows whose rendered height has never been measured contribute placeholder
/// extents, so every offset past the frontier is an estimate that may
/// understate the true position.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum MeasuredFrontier {
    /// Every row height is confirmed; all offsets are authoritative.
    #[default]
    All,
    /// Offsets are confirmed through this index; later ones are estimates.
    Through(usize),
}

/// Cumulative row offsets for the current page.
///
/// `positions[i]` is the pixel offset where row `i` begins. The array is
/// rebuilt by the row-metadata collaborator whenever heights or the row set
/// change; this engine only reads it.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct RowPositions {
    positions: Vec<f32>,
    measured: MeasuredFrontier,
    page_total_height: f32,
}

impl RowPositions {
    /// Index over fully measured rows.
    #[must_use]
    pub fn new(positions: Vec<f32>, page_total_height: f32) -> Self {
        Self {
            positions,
            measured: MeasuredFrontier::All,
            page_total_height,
        }
    }

    /// Restrict the trustworthy region to offsets at or before the frontier.
    #[must_use]
    pub fn with_frontier(mut self, measured: MeasuredFrontier) -> Self {
        self.measured = measured;
        self
    }

    /// Like [`RowPositions::new`] but rejecting malformed input.
    ///
    /// # Errors
    /// Returns an error when an offset is non-finite or the array decreases.
    pub fn try_new(positions: Vec<f32>, page_total_height: f32) -> Result<Self> {
        validate_positions(&positions)?;
        Ok(Self::new(positions, page_total_height))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    #[must_use]
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    /// Offset of row `index`, or `0.0` out of bounds.
    #[must_use]
    pub fn position_of(&self, index: usize) -> f32 {
        self.positions.get(index).copied().unwrap_or(0.0)
    }

    /// Total height of the page's rows.
    #[must_use]
    pub fn total_height(&self) -> f32 {
        self.page_total_height
    }

    #[must_use]
    pub fn measured(&self) -> MeasuredFrontier {
        self.measured
    }

    /// Index of the row nearest to `offset`, honoring the measured frontier.
    ///
    /// Offsets at or before the last confirmed position use a plain binary
    /// search. Past the frontier the offsets are running estimates, so the
    /// search switches to the exponential variant seeded at the frontier,
    /// which self-corrects as soon as a position outpaces the target.
    #[must_use]
    pub fn nearest_index(&self, offset: f32) -> Option<usize> {
        match self.measured {
            MeasuredFrontier::All => binary_search(offset, &self.positions),
            MeasuredFrontier::Through(last) => {
                let last = last.min(self.positions.len().saturating_sub(1));
                if self.position_of(last) >= offset {
                    binary_search(offset, &self.positions)
                } else {
                    exponential_search(offset, &self.positions, last)
                }
            }
        }
    }
}

/// Cumulative column offsets for the visible column set.
///
/// `positions[i]` is the pixel offset of column `i`'s left edge. Column
/// widths are always known up front, so there is no estimation frontier on
/// this axis.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct ColumnPositions {
    positions: Vec<f32>,
    total_width: f32,
}

impl ColumnPositions {
    #[must_use]
    pub fn new(positions: Vec<f32>, total_width: f32) -> Self {
        Self {
            positions,
            total_width,
        }
    }

    /// Like [`ColumnPositions::new`] but rejecting malformed input.
    ///
    /// # Errors
    /// Returns an error when an offset is non-finite or the array decreases.
    pub fn try_new(positions: Vec<f32>, total_width: f32) -> Result<Self> {
        validate_positions(&positions)?;
        Ok(Self::new(positions, total_width))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    #[must_use]
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    /// Offset of column `index`'s left edge, or `0.0` out of bounds.
    #[must_use]
    pub fn position_of(&self, index: usize) -> f32 {
        self.positions.get(index).copied().unwrap_or(0.0)
    }

    /// Total width of all visible columns.
    #[must_use]
    pub fn total_width(&self) -> f32 {
        self.total_width
    }

    /// Index of the first column whose left edge reaches `offset`.
    #[must_use]
    pub fn column_at(&self, offset: f32) -> Option<usize> {
        binary_search(offset, &self.positions)
    }
}

fn validate_positions(positions: &[f32]) -> Result<()> {
    for (i, offset) in positions.iter().enumerate() {
        if !offset.is_finite() {
            return Err(GridportError::NonFinitePosition(i));
        }
    }
    for (i, pair) in positions.windows(2).enumerate() {
        if let &[previous, next] = pair {
            if next < previous {
                return Err(GridportError::NonMonotonicPositions {
                    index: i + 1,
                    previous,
                    next,
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    fn uniform(count: usize, extent: f32) -> Vec<f32> {
        (0..count).map(|i| i as f32 * extent).collect()
    }

    #[test]
    fn nearest_index_uses_binary_search_when_all_measured() {
        let rows = RowPositions::new(uniform(100, 30.0), 3000.0);
        assert_eq!(rows.nearest_index(0.0), Some(0));
        assert_eq!(rows.nearest_index(45.0), Some(2));
        assert_eq!(rows.nearest_index(90.0), Some(3));
    }

    #[test]
    fn nearest_index_before_frontier_stays_binary() {
        let rows = RowPositions::new(uniform(100, 30.0), 3000.0)
            .with_frontier(MeasuredFrontier::Through(50));
        // positions[50] = 1500 >= 600, so the measured prefix covers it.
        assert_eq!(rows.nearest_index(600.0), Some(20));
    }

    #[test]
    fn nearest_index_past_frontier_goes_exponential() {
        // Rows 0-4 measured at 30px, row 5 estimated short, rows 6+ resume.
        let positions = vec![0.0, 30.0, 60.0, 90.0, 120.0, 150.0, 160.0, 190.0, 220.0];
        let rows =
            RowPositions::new(positions, 250.0).with_frontier(MeasuredFrontier::Through(4));
        assert_eq!(rows.nearest_index(200.0), Some(8));
    }

    #[test]
    fn try_new_rejects_decreasing_offsets() {
        let err = RowPositions::try_new(vec![0.0, 30.0, 20.0], 50.0).unwrap_err();
        assert!(matches!(
            err,
            GridportError::NonMonotonicPositions { index: 2, .. }
        ));
    }

    #[test]
    fn try_new_rejects_non_finite_offsets() {
        let err = ColumnPositions::try_new(vec![0.0, f32::NAN], 0.0).unwrap_err();
        assert!(matches!(err, GridportError::NonFinitePosition(1)));
    }

    #[test]
    fn column_at_finds_left_edges() {
        let columns = ColumnPositions::new(uniform(10, 80.0), 800.0);
        assert_eq!(columns.column_at(0.0), Some(0));
        assert_eq!(columns.column_at(200.0), Some(3));
        assert_eq!(columns.column_at(10_000.0), Some(10));
    }
}
