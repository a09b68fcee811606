//! The geometry-provider seam between the engine and the host UI.
//!
//! The engine never touches a rendering surface directly. A host adapter (DOM, GUI toolkit,
//! terminal layout, or a test double) implements these traits and hands them to
//! [`crate::VirtualScroll::new`].

use alloc::vec::Vec;

use crate::{Edges, Point, RowRect, Size};

/// The scrollable viewport that clips the content track.
pub trait ScrollContainer {
    /// The raw scroll notification type; passed through untouched to the scroll observer.
    type Event;

    /// Current scroll position (`x` = horizontal, `y` = vertical).
    fn scroll_position(&self) -> Point;

    /// Visible size of the container, padding included.
    fn visible_size(&self) -> Size;

    /// Bounding rectangle of the container, in the same coordinate space as the rects returned
    /// by [`ContentTrack::child_rects`].
    fn bounding_rect(&self) -> RowRect;

    /// Inner padding of the container.
    fn padding(&self) -> Edges {
        Edges::default()
    }

    /// Scrolls the container to `position`.
    ///
    /// The host is expected to deliver the resulting scroll notification to
    /// [`crate::VirtualScroll::on_scroll`].
    fn scroll_to(&mut self, position: Point);

    /// Starts routing scroll notifications to the engine.
    fn add_scroll_listener(&mut self);

    /// Stops routing scroll notifications to the engine.
    fn remove_scroll_listener(&mut self);
}

/// The element that holds the rendered rows and spans their combined extent.
pub trait ContentTrack {
    /// Natural (layout) size of the track, ignoring any track-size override the engine emitted
    /// through [`crate::PositionalOffset`].
    fn natural_size(&self) -> Size;

    /// Appends the rectangle of every currently rendered row to `out`, in document order.
    ///
    /// `out` is cleared by the caller.
    fn child_rects(&self, out: &mut Vec<RowRect>);

    /// Outer margin of the track.
    fn margin(&self) -> Edges {
        Edges::default()
    }
}
