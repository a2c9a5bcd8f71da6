//! Container sizing descriptors.

use serde::{Deserialize, Serialize};

/// A CSS-style dimension hint for the content block.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
pub enum SizeHint {
    /// Let the layout engine pick the size.
    #[default]
    Auto,
    /// Stretch to the container.
    Fill,
    /// Fixed size in pixels.
    Px(f32),
}

/// Full virtual extent of the grid content, independent of the render
/// context.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct ContentSize {
    pub width: SizeHint,
    /// Total height of the current page, floored at 1px so a horizontal
    /// scrollbar stays reachable even with zero rows.
    pub height: f32,
    pub min_height: SizeHint,
}

/// Overflow flags for the scroll container element.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub struct RootStyleHints {
    /// Hide the horizontal scrollbar: the columns fit the container.
    pub suppress_horizontal_overflow: bool,
    /// Hide the vertical scrollbar: the grid grows to fit its content.
    pub suppress_vertical_overflow: bool,
}
