use core::ops;

/// The scroll axis windowing runs along.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Direction {
    /// Rows stack top to bottom; the primary axis is `top`/`bottom`.
    #[default]
    Vertical,
    /// Rows stack left to right; the primary axis is `left`/`right`.
    Horizontal,
}

impl Direction {
    /// Leading edge of `rect` on the primary axis.
    pub fn leading(self, rect: &RowRect) -> f64 {
        match self {
            Self::Vertical => rect.top,
            Self::Horizontal => rect.left,
        }
    }

    /// Trailing edge of `rect` on the primary axis.
    pub fn trailing(self, rect: &RowRect) -> f64 {
        match self {
            Self::Vertical => rect.bottom,
            Self::Horizontal => rect.right,
        }
    }

    /// Extent of `size` along the primary axis.
    pub fn main(self, size: Size) -> f64 {
        match self {
            Self::Vertical => size.height,
            Self::Horizontal => size.width,
        }
    }

    /// Component of `point` along the primary axis.
    pub fn scroll(self, point: Point) -> f64 {
        match self {
            Self::Vertical => point.y,
            Self::Horizontal => point.x,
        }
    }

    /// Returns `point` with its primary-axis component replaced by `main`.
    pub fn with_scroll(self, point: Point, main: f64) -> Point {
        match self {
            Self::Vertical => Point { x: point.x, y: main },
            Self::Horizontal => Point { x: main, y: point.y },
        }
    }

    pub fn leading_edge(self, edges: Edges) -> f64 {
        match self {
            Self::Vertical => edges.top,
            Self::Horizontal => edges.left,
        }
    }

    pub fn trailing_edge(self, edges: Edges) -> f64 {
        match self {
            Self::Vertical => edges.bottom,
            Self::Horizontal => edges.right,
        }
    }

    /// The other direction.
    pub fn orthogonal(self) -> Self {
        match self {
            Self::Vertical => Self::Horizontal,
            Self::Horizontal => Self::Vertical,
        }
    }
}

/// A 2D position in the host's coordinate space (e.g. a scroll position).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn transposed(self) -> Self {
        Self {
            x: self.y,
            y: self.x,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn transposed(self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }
}

/// Per-side insets, used for container padding and content-track margins.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edges {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Edges {
    pub const fn uniform(v: f64) -> Self {
        Self {
            top: v,
            right: v,
            bottom: v,
            left: v,
        }
    }

    pub fn transposed(self) -> Self {
        Self {
            top: self.left,
            right: self.bottom,
            bottom: self.right,
            left: self.top,
        }
    }
}

/// A layout rectangle as reported by the host, in the same coordinate space as the container's
/// bounding rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowRect {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl RowRect {
    /// Builds a rect from its origin and size.
    pub fn from_origin_size(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            top: y,
            right: x + width,
            bottom: y + height,
            left: x,
        }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Mirrors the rect across the main diagonal (swaps the vertical and horizontal edge pairs).
    pub fn transposed(self) -> Self {
        Self {
            top: self.left,
            right: self.bottom,
            bottom: self.right,
            left: self.top,
        }
    }
}

/// The half-open range of row indexes the host should render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderWindow {
    pub first_index: usize,
    pub last_index: usize, // exclusive
}

impl RenderWindow {
    /// A window spanning every row of a `count`-row sequence.
    pub fn full(count: usize) -> Self {
        Self {
            first_index: 0,
            last_index: count,
        }
    }

    pub fn len(&self) -> usize {
        self.last_index.saturating_sub(self.first_index)
    }

    pub fn is_empty(&self) -> bool {
        self.first_index >= self.last_index
    }

    pub fn contains(&self, index: usize) -> bool {
        self.first_index <= index && index < self.last_index
    }

    pub fn range(&self) -> ops::Range<usize> {
        self.first_index..self.last_index
    }

    /// Clamps both bounds into `0..=count` while keeping `first_index <= last_index`.
    pub fn clamped(self, count: usize) -> Self {
        let last_index = self.last_index.min(count);
        Self {
            first_index: self.first_index.min(last_index),
            last_index,
        }
    }
}

/// The correction the host applies to the content track so the rendered slice is drawn at its
/// true position.
///
/// `Shifted` carries a translate along the primary axis plus an explicit track size (the
/// remaining scroll extent after the translate), so the scrollbar keeps the full-size range
/// even though only a slice of rows is mounted.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PositionalOffset {
    /// No transform and no size override; rows render at their natural position.
    #[default]
    Identity,
    Shifted {
        direction: Direction,
        translate: f64,
        track_size: f64,
    },
}

impl PositionalOffset {
    pub fn is_identity(&self) -> bool {
        matches!(self, Self::Identity)
    }

    /// Translate along the primary axis, if any.
    pub fn translate(&self) -> Option<f64> {
        match *self {
            Self::Identity => None,
            Self::Shifted { translate, .. } => Some(translate),
        }
    }

    pub fn track_size(&self) -> Option<f64> {
        match *self {
            Self::Identity => None,
            Self::Shifted { track_size, .. } => Some(track_size),
        }
    }

    pub fn translate_x(&self) -> Option<f64> {
        self.along(Direction::Horizontal, |translate, _| translate)
    }

    pub fn translate_y(&self) -> Option<f64> {
        self.along(Direction::Vertical, |translate, _| translate)
    }

    /// Track width override (horizontal mode only).
    pub fn width(&self) -> Option<f64> {
        self.along(Direction::Horizontal, |_, size| size)
    }

    /// Track height override (vertical mode only).
    pub fn height(&self) -> Option<f64> {
        self.along(Direction::Vertical, |_, size| size)
    }

    /// The same offset expressed along the orthogonal axis.
    pub fn transposed(self) -> Self {
        match self {
            Self::Identity => Self::Identity,
            Self::Shifted {
                direction,
                translate,
                track_size,
            } => Self::Shifted {
                direction: direction.orthogonal(),
                translate,
                track_size,
            },
        }
    }

    fn along(&self, want: Direction, f: impl Fn(f64, f64) -> f64) -> Option<f64> {
        match *self {
            Self::Shifted {
                direction,
                translate,
                track_size,
            } if direction == want => Some(f(translate, track_size)),
            _ => None,
        }
    }
}
