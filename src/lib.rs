//! gridport - windowing engine for scrollable grids
//!
//! Computes, on every scroll or resize event, the minimal contiguous row and
//! column index window that must be realized for a two-dimensional grid of
//! variable-sized items, without materializing off-screen content:
//! - Binary search over cumulative position arrays, with an exponential
//!   variant for partially estimated row heights
//! - Buffered window expansion and bounds clamping, including pinned-column
//!   zones and column-spanning cells
//! - A scroll/change controller that commits a recomputed window only when
//!   per-edge index thresholds are exceeded, and positions the rendered
//!   content block
//! - A materialization adapter producing per-row render descriptors for the
//!   host renderer
//!
//! The engine owns no rendering, row models, or DOM access; those are
//! collaborators. Hosts push position arrays and the realized row page,
//! forward scroll/resize events, and consume the returned notifications.
//!
//! # Usage
//!
//! ```rust
//! use gridport::{
//!     ColumnPositions, GridSource, RowEntry, RowId, RowPage, RowPositions,
//!     ScrollerOptions, ViewportSize, VirtualScroller,
//! };
//!
//! struct Rows;
//! impl GridSource for Rows {
//!     fn row_height(&self, _id: RowId) -> f32 {
//!         30.0
//!     }
//! }
//!
//! let mut scroller = VirtualScroller::new(ScrollerOptions::default()).unwrap();
//! let positions: Vec<f32> = (0..1000).map(|i| i as f32 * 30.0).collect();
//! scroller.set_rows(
//!     RowPositions::new(positions, 1000.0 * 30.0),
//!     RowPage::contiguous((0..1000).map(RowEntry::new).collect()),
//! );
//! scroller.set_columns(ColumnPositions::new(
//!     (0..20).map(|i| i as f32 * 80.0).collect(),
//!     20.0 * 80.0,
//! ));
//!
//! let tick = scroller.on_resize(ViewportSize::new(800.0, 600.0), &Rows);
//! assert!(tick.is_some());
//! let tick = scroller.on_scroll(3000.0, 0.0, &Rows).unwrap();
//! assert_eq!(tick.render_context.first_row_index, 100);
//! ```

// Data model and collaborator seam
pub mod config;
pub mod error;
pub mod source;
pub mod types;

// Windowing engine
pub mod layout;
pub mod scroller;

pub use config::ScrollerOptions;
pub use error::{GridportError, Result};
pub use layout::{
    binary_search, binary_search_slice, exponential_search, ColumnPositions, MeasuredFrontier,
    RowPositions,
};
pub use scroller::{
    compute_render_context, expand_range, first_non_spanned_column, RenderedRowsParams,
    VirtualScroller,
};
pub use source::GridSource;
pub use types::*;

/// Get the library version
#[must_use]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
