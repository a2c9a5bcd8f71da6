//! Position index and search over cumulative item offsets.
//!
//! This module handles:
//! - Binary search for the first index whose offset reaches a pixel position
//! - Exponential search for arrays whose tail holds estimated offsets
//! - Row/column position indexes with the measured-frontier resolution policy

mod positions;
mod search;

pub use positions::{ColumnPositions, MeasuredFrontier, RowPositions};
pub use search::{binary_search, binary_search_slice, exponential_search};
