use crate::{PositionalOffset, RenderWindow, RowGeometry};

/// Result of one window computation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowState {
    /// Primary-axis scroll position the window was computed for.
    pub scroll: f64,
    pub render_window: RenderWindow,
    pub positional_offset: PositionalOffset,
}

/// Maps a scroll position to the rows that must be rendered, given a geometry snapshot.
///
/// All queries are pure. Row rects are assumed to be laid out in document order along the
/// primary axis, so edge positions are non-decreasing and lookups use binary search.
#[derive(Clone, Copy, Debug)]
pub struct WindowCalculator<'a> {
    geometry: &'a RowGeometry,
    bench: usize,
}

impl<'a> WindowCalculator<'a> {
    pub fn new(geometry: &'a RowGeometry, bench: usize) -> Self {
        Self { geometry, bench }
    }

    pub fn row_count(&self) -> usize {
        self.geometry.len()
    }

    /// Index of the first row still visible at `scroll`: the first row whose trailing edge lies
    /// strictly past `scroll`. Falls back to the last index when every row is scrolled past, and
    /// to `0` when there are no rows.
    pub fn first_row(&self, scroll: f64) -> usize {
        let g = self.geometry;
        let dir = g.direction();
        let found = g
            .row_rects()
            .partition_point(|r| g.to_content(dir.trailing(r)) <= scroll);
        found.min(self.row_count().saturating_sub(1))
    }

    pub fn first_bench_row(&self, first_row: usize) -> usize {
        first_row.saturating_sub(self.bench)
    }

    /// Exclusive end of the visible rows: the first row at or after `first_row` whose leading
    /// edge reaches `scroll + container extent`, or the row count when none does.
    pub fn last_row(&self, scroll: f64, first_row: usize) -> usize {
        let g = self.geometry;
        let dir = g.direction();
        let viewport_end = scroll + g.container_extent();
        let Some(tail) = g.row_rects().get(first_row..) else {
            return self.row_count();
        };
        first_row + tail.partition_point(|r| g.to_content(dir.leading(r)) < viewport_end)
    }

    pub fn last_bench_row(&self, last_row: usize) -> usize {
        last_row.saturating_add(self.bench).min(self.row_count())
    }

    /// Extent that precedes the visible area inside the rendered slice: the span of the bench
    /// rows before `first_row`, minus the part of `first_row` already scrolled past.
    pub fn before_bench_extent(&self, scroll: f64, first_row: usize) -> f64 {
        let g = self.geometry;
        let bench_span = g.span(self.first_bench_row(first_row), first_row);
        let hidden = g
            .leading_position(first_row)
            .map(|leading| {
                leading - scroll - g.direction().leading_edge(g.track_margin())
            })
            .unwrap_or(0.0);
        bench_span - hidden
    }

    /// Translate + track-size correction for a slice whose preceding extent is
    /// `before_bench_extent`. Identity when there are no rows or the track does not overflow
    /// the container.
    pub fn positional_offset(&self, scroll: f64, before_bench_extent: f64) -> PositionalOffset {
        let g = self.geometry;
        if g.is_empty() || !g.is_scrollable() {
            return PositionalOffset::Identity;
        }
        let dir = g.direction();
        let translate =
            scroll - before_bench_extent - dir.trailing_edge(g.container_padding()) / 2.0;
        PositionalOffset::Shifted {
            direction: dir,
            translate,
            track_size: (g.scroll_extent() - translate).max(0.0),
        }
    }

    pub fn compute(&self, scroll: f64) -> WindowState {
        let first_row = self.first_row(scroll);
        let last_row = self.last_row(scroll, first_row);
        let render_window = RenderWindow {
            first_index: self.first_bench_row(first_row),
            last_index: self.last_bench_row(last_row),
        };
        let before = self.before_bench_extent(scroll, first_row);
        let positional_offset = self.positional_offset(scroll, before);
        vtrace!(
            scroll,
            first_row,
            last_row,
            first_index = render_window.first_index,
            last_index = render_window.last_index,
            "WindowCalculator::compute"
        );
        WindowState {
            scroll,
            render_window,
            positional_offset,
        }
    }
}
