use crate::Direction;

/// Configuration for [`crate::VirtualScroll`].
///
/// Options are fixed for the lifetime of an engine; to change them, build a new engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Options {
    /// Number of off-screen "bench" rows kept mounted on each side of the visible rows.
    pub bench: usize,
    pub direction: Direction,
}

impl Options {
    pub fn new(bench: usize, direction: Direction) -> Self {
        Self { bench, direction }
    }

    /// Vertical options with the given bench.
    pub fn vertical(bench: usize) -> Self {
        Self::new(bench, Direction::Vertical)
    }

    /// Horizontal options with the given bench.
    pub fn horizontal(bench: usize) -> Self {
        Self::new(bench, Direction::Horizontal)
    }

    pub fn with_bench(mut self, bench: usize) -> Self {
        self.bench = bench;
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }
}
