//! A headless windowing engine for virtual scrolling.
//!
//! Given a long, ordered sequence of rows inside a scrollable container, the engine decides
//! which slice of rows the host must actually render for the current scroll position (plus a
//! few off-screen "bench" rows on each side), and how far the content track must be shifted so
//! that slice appears where the full list would have put it.
//!
//! Rows may have arbitrary, non-uniform sizes: the engine works from the rectangles the host
//! reports after painting. Because fresh rectangles only exist once the host has painted new
//! rows, replacing rows is a two-phase operation:
//!
//! 1. [`VirtualScroll::update_rows`] stores the rows and returns a [`PendingCommit`]. The
//!    render window now spans every row.
//! 2. After the host has painted, [`PendingCommit::commit`] re-measures and recomputes.
//!
//! The engine is UI-agnostic. A host adapter implements [`ScrollContainer`] and
//! [`ContentTrack`] (the geometry provider), forwards scroll notifications to
//! [`VirtualScroll::on_scroll`], and renders [`VirtualScroll::render_rows`] under
//! [`VirtualScroll::positional_offset`].
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod engine;
mod geometry;
mod options;
mod provider;
mod types;
mod window;


pub use engine::{PendingCommit, ScrollObserver, VirtualScroll};
pub use geometry::RowGeometry;
pub use options::Options;
pub use provider::{ContentTrack, ScrollContainer};
pub use types::{Direction, Edges, Point, PositionalOffset, RenderWindow, RowRect, Size};
pub use window::{WindowCalculator, WindowState};
