use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::provider::{ContentTrack, ScrollContainer};
use crate::{
    Options, PositionalOffset, RenderWindow, RowGeometry, WindowCalculator, WindowState,
};

/// A scroll observer. Invoked after the engine has recomputed its window for a scroll
/// notification, so getters called from inside the observer already reflect that scroll.
pub type ScrollObserver<R, C, T> =
    Box<dyn FnMut(&VirtualScroll<R, C, T>, &<C as ScrollContainer>::Event)>;

/// A single-use token returned by [`VirtualScroll::update_rows`].
///
/// The host paints the new rows first (the render window spans all of them until the commit),
/// then calls [`PendingCommit::commit`] so the engine re-measures against what was painted.
#[must_use = "row geometry is stale until the pending commit is committed"]
#[derive(Debug, PartialEq, Eq)]
pub struct PendingCommit {
    generation: u64,
}

impl PendingCommit {
    /// Re-measures geometry and recomputes the window at the container's current scroll
    /// position.
    ///
    /// Returns `false` (and changes nothing) when a newer update superseded this token.
    pub fn commit<R, C, T>(self, engine: &mut VirtualScroll<R, C, T>) -> bool
    where
        C: ScrollContainer,
        T: ContentTrack,
    {
        engine.commit(self)
    }
}

/// The windowing engine.
///
/// Owns the row sequence, the latest [`RowGeometry`] snapshot and the latest [`WindowState`].
/// Scroll notifications only recompute the window against the stored geometry; geometry is
/// re-read from the host exclusively at construction and on commit.
pub struct VirtualScroll<R, C, T>
where
    C: ScrollContainer,
    T: ContentTrack,
{
    options: Options,
    rows: Vec<R>,
    container: C,
    track: T,
    geometry: RowGeometry,
    window: WindowState,
    observer: Option<ScrollObserver<R, C, T>>,
    attached: bool,
    generation: u64,
    pending: Option<u64>,
}

impl<R, C, T> VirtualScroll<R, C, T>
where
    C: ScrollContainer,
    T: ContentTrack,
{
    /// Binds the engine to the host surface and performs the initial measurement.
    ///
    /// Every row in `rows` must already be painted inside `track`, with no positional offset
    /// applied.
    pub fn new(mut container: C, track: T, rows: Vec<R>, options: Options) -> Self {
        container.add_scroll_listener();
        vdebug!(
            rows = rows.len(),
            bench = options.bench,
            direction = ?options.direction,
            "VirtualScroll::new"
        );
        let geometry = RowGeometry::measure(options.direction, &container, &track, 0.0);
        let mut engine = Self {
            options,
            rows,
            container,
            track,
            geometry,
            window: WindowState::default(),
            observer: None,
            attached: true,
            generation: 0,
            pending: None,
        };
        engine.recompute();
        engine
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn geometry(&self) -> &RowGeometry {
        &self.geometry
    }

    pub fn container(&self) -> &C {
        &self.container
    }

    pub fn container_mut(&mut self) -> &mut C {
        &mut self.container
    }

    pub fn track(&self) -> &T {
        &self.track
    }

    pub fn track_mut(&mut self) -> &mut T {
        &mut self.track
    }

    /// The half-open range of rows to render.
    pub fn render_window(&self) -> RenderWindow {
        self.window.render_window
    }

    /// The rows inside [`Self::render_window`].
    pub fn render_rows(&self) -> &[R] {
        self.rows
            .get(self.window.render_window.range())
            .unwrap_or(&[])
    }

    pub fn first_render_index(&self) -> usize {
        self.window.render_window.first_index
    }

    pub fn last_render_index(&self) -> usize {
        self.window.render_window.last_index
    }

    pub fn positional_offset(&self) -> PositionalOffset {
        self.window.positional_offset
    }

    pub fn window_state(&self) -> WindowState {
        self.window
    }

    /// Primary-axis scroll position of the last window computation.
    pub fn scroll_position(&self) -> f64 {
        self.window.scroll
    }

    /// Whether an [`update_rows`](Self::update_rows) is waiting for its commit.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Handles a scroll notification from the container.
    ///
    /// Reads the container's scroll position, recomputes the window against the stored
    /// geometry, then forwards `event` to the scroll observer. Ignored after [`Self::detach`].
    pub fn on_scroll(&mut self, event: C::Event) {
        if !self.attached {
            vwarn!("VirtualScroll::on_scroll after detach");
            return;
        }
        if self.pending.is_none() {
            self.recompute();
        }
        if let Some(mut observer) = self.observer.take() {
            observer(self, &event);
            self.observer = Some(observer);
        }
    }

    /// Installs the scroll observer, replacing any previous one.
    pub fn add_scroll_observer(
        &mut self,
        observer: impl FnMut(&VirtualScroll<R, C, T>, &C::Event) + 'static,
    ) {
        self.observer = Some(Box::new(observer));
    }

    pub fn remove_scroll_observer(&mut self) {
        self.observer = None;
    }

    pub fn has_scroll_observer(&self) -> bool {
        self.observer.is_some()
    }

    /// Replaces the row sequence.
    ///
    /// Until the returned token is committed, the render window spans every row so the host
    /// paints the full set for measurement, and scroll notifications leave the window alone.
    /// Calling this again before committing supersedes the previous token.
    pub fn update_rows(&mut self, rows: Vec<R>) -> PendingCommit {
        self.rows = rows;
        self.begin_measurement_pass()
    }

    /// Appends rows to the sequence. Same protocol as [`Self::update_rows`].
    pub fn extend_rows(&mut self, rows: impl IntoIterator<Item = R>) -> PendingCommit {
        self.rows.extend(rows);
        self.begin_measurement_pass()
    }

    /// Requests a measurement pass without changing rows, e.g. after the host resized the
    /// container or restyled rows. Same protocol as [`Self::update_rows`].
    pub fn invalidate_geometry(&mut self) -> PendingCommit {
        self.begin_measurement_pass()
    }

    /// Completes a measurement pass. See [`PendingCommit::commit`].
    pub fn commit(&mut self, pending: PendingCommit) -> bool {
        if self.pending != Some(pending.generation) {
            vwarn!(
                generation = pending.generation,
                current = self.generation,
                "VirtualScroll::commit with a superseded token"
            );
            return false;
        }
        self.pending = None;

        let applied = self.window.positional_offset.translate().unwrap_or(0.0);
        self.geometry =
            RowGeometry::measure(self.options.direction, &self.container, &self.track, applied);
        if self.geometry.len() != self.rows.len() {
            vwarn!(
                rects = self.geometry.len(),
                rows = self.rows.len(),
                "VirtualScroll::commit measured a different number of rows than it holds"
            );
        }
        self.recompute();
        vdebug!(
            generation = pending.generation,
            first_index = self.window.render_window.first_index,
            last_index = self.window.render_window.last_index,
            "VirtualScroll::commit"
        );
        true
    }

    /// Scrolls the container so that row `index` starts at the container's leading edge.
    ///
    /// The window is not updated here; the scroll notification the host delivers afterwards
    /// does that. `index` must be in `0..row_count()`: out-of-range indexes do nothing and
    /// return `None`. Returns the requested primary-axis scroll position.
    pub fn move_to_row(&mut self, index: usize) -> Option<f64> {
        let Some(target) = self.geometry.leading_position(index) else {
            vwarn!(
                index,
                rows = self.geometry.len(),
                "VirtualScroll::move_to_row out of range"
            );
            return None;
        };
        let dir = self.options.direction;
        let position = dir.with_scroll(self.container.scroll_position(), target);
        vtrace!(index, target, "VirtualScroll::move_to_row");
        self.container.scroll_to(position);
        Some(target)
    }

    /// Stops listening to the container. Idempotent; also runs on drop.
    pub fn detach(&mut self) {
        if !self.attached {
            return;
        }
        self.attached = false;
        self.container.remove_scroll_listener();
        vdebug!("VirtualScroll::detach");
    }

    fn begin_measurement_pass(&mut self) -> PendingCommit {
        self.generation = self.generation.wrapping_add(1);
        self.pending = Some(self.generation);
        self.window.render_window = RenderWindow::full(self.rows.len());
        vdebug!(
            generation = self.generation,
            rows = self.rows.len(),
            "VirtualScroll: measurement pass started"
        );
        PendingCommit {
            generation: self.generation,
        }
    }

    fn recompute(&mut self) {
        let scroll = self
            .options
            .direction
            .scroll(self.container.scroll_position());
        let mut window = WindowCalculator::new(&self.geometry, self.options.bench).compute(scroll);
        window.render_window = window.render_window.clamped(self.rows.len());
        self.window = window;
    }
}

impl<R, C, T> Drop for VirtualScroll<R, C, T>
where
    C: ScrollContainer,
    T: ContentTrack,
{
    fn drop(&mut self) {
        self.detach();
    }
}

impl<R, C, T> core::fmt::Debug for VirtualScroll<R, C, T>
where
    C: ScrollContainer,
    T: ContentTrack,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("VirtualScroll")
            .field("options", &self.options)
            .field("rows", &self.rows.len())
            .field("window", &self.window)
            .field("attached", &self.attached)
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}
