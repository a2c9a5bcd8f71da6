//! Row materialization: turn a committed context into per-row render
//! descriptors for the rendering collaborator.

use crate::source::GridSource;
use crate::types::{RenderContext, RenderedRows, RowHeight, RowRenderDescriptor};

use super::context::{expand_range, first_non_spanned_column};
use super::VirtualScroller;

/// Optional overrides for [`VirtualScroller::rendered_rows`]. Every `None`
/// falls back to the controller's committed context, configured column
/// bounds, and measured container width.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderedRowsParams {
    /// Context to materialize instead of the committed one.
    pub render_context: Option<RenderContext>,
    /// Lower column bound, for hosts rendering a pinned-zone subset.
    pub min_first_column: Option<usize>,
    /// Upper column bound, exclusive.
    pub max_last_column: Option<usize>,
    /// Width available to the columns, when the host lays out into a
    /// different container than the scroll viewport.
    pub available_width: Option<f32>,
    /// Resolve auto-height rows to their current measured value instead of
    /// [`RowHeight::Auto`] (print/export paths need concrete heights).
    pub ignore_auto_height: bool,
}

impl VirtualScroller {
    /// Materialize the rows and visible-column slice for a context.
    ///
    /// Returns `None` while there is nothing to render: no page range
    /// descriptor yet, no committed (or supplied) context, or no known
    /// container width.
    #[must_use]
    pub fn rendered_rows(
        &self,
        params: RenderedRowsParams,
        source: &dyn GridSource,
    ) -> Option<RenderedRows> {
        let context = params.render_context.or(self.committed)?;
        let range = self.page.range?;
        let available_width = params
            .available_width
            .or_else(|| self.viewport.map(|v| v.width))?;

        // With virtualization disabled the context already spans everything.
        let (row_buffer, column_buffer) = if self.options.disable_virtualization {
            (0, 0)
        } else {
            (self.options.row_buffer, self.options.column_buffer)
        };

        let (first_row_to_render, last_row_to_render) = expand_range(
            context.first_row_index,
            context.last_row_index,
            row_buffer,
            0,
            self.page.len(),
        );

        let min_first_column = params
            .min_first_column
            .unwrap_or(self.options.render_zone_min_column_index);
        let max_last_column = params
            .max_last_column
            .or(self.options.render_zone_max_column_index)
            .unwrap_or_else(|| self.columns.len());

        let (initial_first_column, last_column_to_render) = expand_range(
            context.first_column_index,
            context.last_column_index,
            column_buffer,
            min_first_column,
            max_last_column,
        );

        let first_column_to_render = first_non_spanned_column(
            initial_first_column,
            first_row_to_render,
            last_row_to_render,
            &self.page,
            source,
        );

        let page_len = self.page.len();
        let mut rows = Vec::with_capacity(last_row_to_render.saturating_sub(first_row_to_render));

        for (i, entry) in self
            .page
            .rows
            .iter()
            .enumerate()
            .take(last_row_to_render)
            .skip(first_row_to_render)
        {
            let height = if source.row_has_auto_height(entry.id) && !params.ignore_auto_height {
                RowHeight::Auto
            } else {
                RowHeight::Px(source.row_height(entry.id))
            };

            let selected = if source.selection_contains(entry.id) {
                source.is_row_selectable(entry.id).unwrap_or(true)
            } else {
                false
            };

            rows.push(RowRenderDescriptor {
                id: entry.id,
                index: range.first_row_index + i,
                height,
                selected,
                is_last_visible: i + 1 == page_len,
            });
        }

        Some(RenderedRows {
            rows,
            first_row_index: first_row_to_render,
            last_row_index: last_row_to_render,
            first_column_index: first_column_to_render,
            last_column_index: last_column_to_render,
            container_width: available_width,
        })
    }
}
