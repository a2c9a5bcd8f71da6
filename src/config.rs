//! Engine configuration.

use serde::{Deserialize, Serialize};

use crate::error::{GridportError, Result};

/// Default extra rows rendered beyond the visible window.
pub const DEFAULT_ROW_BUFFER: usize = 3;

/// Default extra columns rendered beyond the visible window.
pub const DEFAULT_COLUMN_BUFFER: usize = 3;

/// Default minimum index movement before a recomputed context is committed.
pub const DEFAULT_THRESHOLD: usize = 3;

/// Default base row height in pixels.
pub const DEFAULT_ROW_HEIGHT: f32 = 52.0;

/// Tuning knobs for the scroll/change controller.
///
/// Buffers mask pop-in during fast scrolling; thresholds keep sub-pixel
/// scrolling from forcing a reflow on every event. Both are measured in item
/// indexes, not pixels.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ScrollerOptions {
    /// Extra rows rendered above and below the visible window.
    pub row_buffer: usize,
    /// Extra columns rendered left and right of the visible window.
    pub column_buffer: usize,
    /// Minimum per-edge row index delta required to commit a new context.
    pub row_threshold: usize,
    /// Minimum per-edge column index delta required to commit a new context.
    pub column_threshold: usize,
    /// Base row height in pixels, used to size the empty-grid overlay area.
    pub row_height: f32,
    /// The grid grows to fit its content instead of scrolling vertically.
    pub auto_height: bool,
    /// Render the entire grid; the window never changes during scroll.
    pub disable_virtualization: bool,
    /// First column index belonging to the virtualized middle region.
    /// Columns before it are pinned and excluded from windowing.
    pub render_zone_min_column_index: usize,
    /// One past the last column index of the virtualized middle region.
    /// `None` means all visible columns.
    pub render_zone_max_column_index: Option<usize>,
}

impl Default for ScrollerOptions {
    fn default() -> Self {
        Self {
            row_buffer: DEFAULT_ROW_BUFFER,
            column_buffer: DEFAULT_COLUMN_BUFFER,
            row_threshold: DEFAULT_THRESHOLD,
            column_threshold: DEFAULT_THRESHOLD,
            row_height: DEFAULT_ROW_HEIGHT,
            auto_height: false,
            disable_virtualization: false,
            render_zone_min_column_index: 0,
            render_zone_max_column_index: None,
        }
    }
}

impl ScrollerOptions {
    /// Check the options for values the engine cannot work with.
    ///
    /// # Errors
    /// Returns an error if `row_height` is non-finite or not positive, or if
    /// the pinned-column bounds are inverted.
    pub fn validate(&self) -> Result<()> {
        if !self.row_height.is_finite() || self.row_height <= 0.0 {
            return Err(GridportError::Options(format!(
                "row_height must be finite and positive, got {}",
                self.row_height
            )));
        }
        if let Some(max) = self.render_zone_max_column_index {
            if max < self.render_zone_min_column_index {
                return Err(GridportError::Options(format!(
                    "render zone column bounds inverted: min {} > max {max}",
                    self.render_zone_min_column_index
                )));
            }
        }
        Ok(())
    }
}
