use alloc::vec::Vec;

use crate::provider::{ContentTrack, ScrollContainer};
use crate::{Direction, Edges, RowRect, Size};

/// An immutable snapshot of the measured layout: one rect per row plus container and
/// content-track metrics.
///
/// Row rects are stored exactly as reported by the host. Queries convert them into
/// content-relative positions (distance from the start of the scroll track) using the
/// container's leading edge and the calibration offset captured at measurement time, so the
/// snapshot stays valid while the container scrolls.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RowGeometry {
    direction: Direction,
    row_rects: Vec<RowRect>,
    container_rect: RowRect,
    container_size: Size,
    container_padding: Edges,
    track_size: Size,
    track_margin: Edges,
    calibration_offset: f64,
}

impl RowGeometry {
    /// A geometry with no rows and zero-sized container/track.
    pub fn empty(direction: Direction) -> Self {
        Self {
            direction,
            ..Self::default()
        }
    }

    /// Reads a fresh snapshot from the host.
    ///
    /// `applied_translate` is the primary-axis translate currently applied to the content track
    /// (the one last returned through [`crate::PositionalOffset`], or `0.0`). Every row of the
    /// row sequence must be painted when this runs; reading earlier yields stale geometry.
    pub fn measure<C, T>(
        direction: Direction,
        container: &C,
        track: &T,
        applied_translate: f64,
    ) -> Self
    where
        C: ScrollContainer + ?Sized,
        T: ContentTrack + ?Sized,
    {
        let mut row_rects = Vec::new();
        track.child_rects(&mut row_rects);

        let scroll = direction.scroll(container.scroll_position());
        let geometry = Self {
            direction,
            row_rects,
            container_rect: container.bounding_rect(),
            container_size: container.visible_size(),
            container_padding: container.padding(),
            track_size: track.natural_size(),
            track_margin: track.margin(),
            calibration_offset: scroll - applied_translate,
        };
        vdebug!(
            rows = geometry.row_rects.len(),
            scroll,
            applied_translate,
            calibration_offset = geometry.calibration_offset,
            "RowGeometry::measure"
        );
        geometry
    }

    /// Builds a snapshot from already known parts (useful for hosts that lay rows out
    /// themselves, and for tests).
    pub fn from_parts(
        direction: Direction,
        row_rects: Vec<RowRect>,
        container_rect: RowRect,
        container_size: Size,
        track_size: Size,
        calibration_offset: f64,
    ) -> Self {
        Self {
            direction,
            row_rects,
            container_rect,
            container_size,
            container_padding: Edges::default(),
            track_size,
            track_margin: Edges::default(),
            calibration_offset,
        }
    }

    pub fn with_container_padding(mut self, padding: Edges) -> Self {
        self.container_padding = padding;
        self
    }

    pub fn with_track_margin(mut self, margin: Edges) -> Self {
        self.track_margin = margin;
        self
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn len(&self) -> usize {
        self.row_rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.row_rects.is_empty()
    }

    pub fn row_rects(&self) -> &[RowRect] {
        &self.row_rects
    }

    pub fn container_rect(&self) -> RowRect {
        self.container_rect
    }

    pub fn container_size(&self) -> Size {
        self.container_size
    }

    pub fn container_padding(&self) -> Edges {
        self.container_padding
    }

    pub fn track_size(&self) -> Size {
        self.track_size
    }

    pub fn track_margin(&self) -> Edges {
        self.track_margin
    }

    pub fn calibration_offset(&self) -> f64 {
        self.calibration_offset
    }

    /// Visible extent of the container along the primary axis.
    pub fn container_extent(&self) -> f64 {
        self.direction.main(self.container_size)
    }

    /// Natural extent of the content track along the primary axis.
    pub fn track_extent(&self) -> f64 {
        self.direction.main(self.track_size)
    }

    /// Whether the track overflows the container, i.e. a scrollbar would appear.
    pub fn is_scrollable(&self) -> bool {
        self.track_extent() > self.container_extent()
    }

    /// Total scrollable extent: the track plus the container's primary-axis padding when the
    /// track overflows.
    pub fn scroll_extent(&self) -> f64 {
        let track = self.track_extent();
        if !self.is_scrollable() {
            return track;
        }
        track
            + self.direction.leading_edge(self.container_padding)
            + self.direction.trailing_edge(self.container_padding)
    }

    /// Converts a host coordinate on the primary axis into a content-relative position.
    pub fn to_content(&self, coordinate: f64) -> f64 {
        coordinate - self.direction.leading(&self.container_rect) + self.calibration_offset
    }

    /// Content-relative position of a row's leading edge.
    pub fn leading_position(&self, index: usize) -> Option<f64> {
        let rect = self.row_rects.get(index)?;
        Some(self.to_content(self.direction.leading(rect)))
    }

    /// Content-relative position of a row's trailing edge.
    pub fn trailing_position(&self, index: usize) -> Option<f64> {
        let rect = self.row_rects.get(index)?;
        Some(self.to_content(self.direction.trailing(rect)))
    }

    /// Primary-axis span covered by rows `start..end` (leading edge of `start` to trailing edge
    /// of `end - 1`). Empty or out-of-range spans are `0.0`.
    pub fn span(&self, start: usize, end: usize) -> f64 {
        if start >= end {
            return 0.0;
        }
        let (Some(first), Some(last)) = (self.row_rects.get(start), self.row_rects.get(end - 1))
        else {
            return 0.0;
        };
        self.direction.trailing(last) - self.direction.leading(first)
    }

    /// The same layout with the axes swapped and the direction flipped.
    pub fn transposed(&self) -> Self {
        Self {
            direction: self.direction.orthogonal(),
            row_rects: self.row_rects.iter().map(|r| r.transposed()).collect(),
            container_rect: self.container_rect.transposed(),
            container_size: self.container_size.transposed(),
            container_padding: self.container_padding.transposed(),
            track_size: self.track_size.transposed(),
            track_margin: self.track_margin.transposed(),
            calibration_offset: self.calibration_offset,
        }
    }
}
