//! Scroll/change controller - the owner of all windowing state.
//!
//! This module provides the [`VirtualScroller`] state machine that handles:
//! - Recomputing the render context on every scroll and resize event
//! - Deciding whether a recomputed context replaces the committed one
//!   (per-edge index thresholds, column total-width changes)
//! - Positioning the rendered content block after each commit
//! - Content sizing and scroll-container overflow hints

mod context;
mod rows;

pub use context::{compute_render_context, expand_range, first_non_spanned_column};
pub use rows::RenderedRowsParams;

use crate::config::ScrollerOptions;
use crate::error::Result;
use crate::layout::{ColumnPositions, RowPositions};
use crate::source::GridSource;
use crate::types::{
    ContentSize, RenderContext, RenderZoneOffset, RootStyleHints, RowPage, ScrollParams,
    ScrollPosition, SizeHint, ViewportSize,
};

/// Windowing state machine for one grid.
///
/// Owns the scroll position, viewport size, committed render context, and
/// render-zone translation; collaborators read them through accessors and
/// never write. Until the first viewport size arrives the controller is in a
/// wait state: scroll events update the stored position but compute nothing.
///
/// Both event handlers return the scroll notification for the host to fan
/// out; the context commit and the render-zone repositioning happen
/// synchronously inside the call, so by the time the handler returns the
/// engine's state is consistent with what the next paint should show.
#[derive(Debug)]
pub struct VirtualScroller {
    options: ScrollerOptions,
    rows: RowPositions,
    columns: ColumnPositions,
    page: RowPage,

    scroll_position: ScrollPosition,
    viewport: Option<ViewportSize>,
    committed: Option<RenderContext>,
    last_committed_total_width: f32,
    render_zone_offset: RenderZoneOffset,
}

impl VirtualScroller {
    /// Create a controller with no rows, columns, or viewport yet.
    ///
    /// # Errors
    /// Returns an error when the options fail validation.
    pub fn new(options: ScrollerOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self {
            options,
            rows: RowPositions::default(),
            columns: ColumnPositions::default(),
            page: RowPage::default(),
            scroll_position: ScrollPosition::default(),
            viewport: None,
            committed: None,
            last_committed_total_width: 0.0,
            render_zone_offset: RenderZoneOffset::default(),
        })
    }

    #[must_use]
    pub fn options(&self) -> &ScrollerOptions {
        &self.options
    }

    /// Replace the row position index and page. Called by the row-metadata
    /// collaborator whenever heights or the row set change.
    pub fn set_rows(&mut self, rows: RowPositions, page: RowPage) {
        self.rows = rows;
        self.page = page;
    }

    /// Replace the column position index. A changed total width is picked up
    /// by the commit check on the next scroll event.
    pub fn set_columns(&mut self, columns: ColumnPositions) {
        self.columns = columns;
    }

    /// Toggle virtualization at runtime.
    ///
    /// Disabling moves the render zone back to the origin (the full grid is
    /// rendered in place); re-enabling resets the stored scroll position so
    /// the next event starts from the grid origin.
    pub fn set_virtualization_disabled(&mut self, disabled: bool) {
        self.options.disable_virtualization = disabled;
        if disabled {
            self.render_zone_offset = RenderZoneOffset::default();
        } else {
            self.scroll_position = ScrollPosition::default();
        }
    }

    #[must_use]
    pub fn scroll_position(&self) -> ScrollPosition {
        self.scroll_position
    }

    #[must_use]
    pub fn viewport(&self) -> Option<ViewportSize> {
        self.viewport
    }

    /// The last committed render context, if any.
    #[must_use]
    pub fn render_context(&self) -> Option<RenderContext> {
        self.committed
    }

    /// Translation currently applied to the rendered content block.
    #[must_use]
    pub fn render_zone_offset(&self) -> RenderZoneOffset {
        self.render_zone_offset
    }

    /// Compute the unbuffered window for the current scroll position.
    ///
    /// Returns `None` while the viewport size is unknown.
    #[must_use]
    pub fn compute_render_context(&self, source: &dyn GridSource) -> Option<RenderContext> {
        let viewport = self.viewport?;
        Some(compute_render_context(
            self.scroll_position,
            viewport,
            &self.rows,
            &self.page,
            &self.columns,
            &self.options,
            source,
        ))
    }

    /// Handle a viewport size change, including the initial mount.
    ///
    /// Commits unconditionally: a resize changes the container width, which
    /// invalidates any previously committed window. Returns the scroll
    /// notification carrying the fresh context.
    pub fn on_resize(
        &mut self,
        viewport: ViewportSize,
        source: &dyn GridSource,
    ) -> Option<ScrollParams> {
        self.viewport = Some(viewport);
        let next = self.compute_render_context(source)?;
        self.commit(next, source);
        Some(ScrollParams {
            top: self.scroll_position.top,
            left: self.scroll_position.left,
            render_context: next,
        })
    }

    /// Handle a scroll event.
    ///
    /// Stores the new offsets, then recomputes the window and commits it if
    /// any edge moved at least its threshold or the column total width
    /// changed since the last commit. Negative offsets (elastic overscroll)
    /// and events before the first commit only store the position and return
    /// `None`; every other event returns a notification with whichever
    /// context is now authoritative.
    pub fn on_scroll(
        &mut self,
        top: f32,
        left: f32,
        source: &dyn GridSource,
    ) -> Option<ScrollParams> {
        self.scroll_position.top = top;
        self.scroll_position.left = left;

        let previous = self.committed?;
        if top < 0.0 || left < 0.0 {
            return None;
        }

        // When virtualization is disabled the window never changes during
        // scroll, so skip the search entirely.
        let next = if self.options.disable_virtualization {
            previous
        } else {
            self.compute_render_context(source)?
        };

        let top_rows_scrolled = next.first_row_index.abs_diff(previous.first_row_index);
        let bottom_rows_scrolled = next.last_row_index.abs_diff(previous.last_row_index);
        let left_columns_scrolled = next.first_column_index.abs_diff(previous.first_column_index);
        let right_columns_scrolled = next.last_column_index.abs_diff(previous.last_column_index);

        let total_width_changed =
            (self.columns.total_width() - self.last_committed_total_width).abs() > f32::EPSILON;

        let should_commit = top_rows_scrolled >= self.options.row_threshold
            || bottom_rows_scrolled >= self.options.row_threshold
            || left_columns_scrolled >= self.options.column_threshold
            || right_columns_scrolled >= self.options.column_threshold
            || total_width_changed;

        if should_commit {
            self.commit(next, source);
        }

        Some(ScrollParams {
            top,
            left,
            render_context: if should_commit { next } else { previous },
        })
    }

    /// Full virtual extent of the content block.
    ///
    /// Returns `None` while the viewport size is unknown.
    #[must_use]
    pub fn content_size(&self) -> Option<ContentSize> {
        let viewport = self.viewport?;

        // Keeping 1px as minimum height ensures the horizontal scrollbar
        // stays reachable when there are no rows.
        let mut height = self.rows.total_height().max(1.0);
        if self.options.auto_height && self.page.is_empty() {
            // Room for the empty-state overlay.
            height = 2.0 * self.options.row_height;
        }

        let width = if self.needs_horizontal_scrollbar() {
            SizeHint::Px(self.columns.total_width())
        } else {
            SizeHint::Auto
        };

        let min_height = if height <= viewport.height {
            SizeHint::Fill
        } else {
            SizeHint::Auto
        };

        Some(ContentSize {
            width,
            height,
            min_height,
        })
    }

    /// Overflow flags for the scroll container element.
    #[must_use]
    pub fn root_style_hints(&self) -> RootStyleHints {
        RootStyleHints {
            suppress_horizontal_overflow: !self.needs_horizontal_scrollbar(),
            suppress_vertical_overflow: self.options.auto_height,
        }
    }

    fn needs_horizontal_scrollbar(&self) -> bool {
        self.viewport
            .is_some_and(|v| self.columns.total_width() > v.width)
    }

    /// Commit a context and reposition the render zone, in that order, before
    /// returning to the host.
    fn commit(&mut self, next: RenderContext, source: &dyn GridSource) {
        log::debug!(
            "committing render context rows [{}, {}) columns [{}, {})",
            next.first_row_index,
            next.last_row_index,
            next.first_column_index,
            next.last_column_index,
        );
        self.committed = Some(next);
        self.last_committed_total_width = self.columns.total_width();
        self.update_render_zone_position(source);
    }

    /// Recompute the content-block translation from the committed context.
    ///
    /// Reads only current state, so a re-entrant re-run after a newer commit
    /// lands on the newer context rather than a stale one.
    fn update_render_zone_position(&mut self, source: &dyn GridSource) {
        let Some(context) = self.committed else {
            return;
        };

        let (first_row_to_render, last_row_to_render) = expand_range(
            context.first_row_index,
            context.last_row_index,
            self.options.row_buffer,
            0,
            self.page.len(),
        );

        let max_last_column = self
            .options
            .render_zone_max_column_index
            .unwrap_or_else(|| self.columns.len());
        let (initial_first_column, _) = expand_range(
            context.first_column_index,
            context.last_column_index,
            self.options.column_buffer,
            self.options.render_zone_min_column_index,
            max_last_column,
        );

        let first_column_to_render = first_non_spanned_column(
            initial_first_column,
            first_row_to_render,
            last_row_to_render,
            &self.page,
            source,
        );

        self.render_zone_offset = RenderZoneOffset {
            left: self.columns.position_of(first_column_to_render),
            top: self.rows.position_of(first_row_to_render),
        };
        log::trace!(
            "render zone repositioned to ({}, {})",
            self.render_zone_offset.left,
            self.render_zone_offset.top,
        );
    }
}
