//! Geometry primitives: [`Position`], [`Offset`] and [`Bounds`].
//!
//! Coordinates follow the row-major layout of the input grid: `x` is the
//! row index and `y` the column index, both zero-based.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// A cell coordinate on the terrain grid. `x` grows down, `y` grows right.
///
/// Identity is the `(x, y)` pair and nothing else: two positions with equal
/// coordinates compare equal and hash identically.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new position.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return a position shifted by (dx, dy).
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The step that leads from `self` to `other`.
    ///
    /// Overflows for coordinates more than `i32::MAX` apart; see
    /// [`checked_offset_to`](Self::checked_offset_to).
    #[inline]
    pub const fn offset_to(self, other: Position) -> Offset {
        Offset::new(other.x - self.x, other.y - self.y)
    }

    /// Like [`offset_to`](Self::offset_to), or `None` if the step does not
    /// fit in an `i32` per axis.
    #[inline]
    pub const fn checked_offset_to(self, other: Position) -> Option<Offset> {
        match (other.x.checked_sub(self.x), other.y.checked_sub(self.y)) {
            (Some(dx), Some(dy)) => Some(Offset::new(dx, dy)),
            _ => None,
        }
    }

    /// Position shifted by `step`, or `None` on overflow.
    #[inline]
    pub const fn checked_add(self, step: Offset) -> Option<Position> {
        match (self.x.checked_add(step.dx), self.y.checked_add(step.dy)) {
            (Some(x), Some(y)) => Some(Position::new(x, y)),
            _ => None,
        }
    }

    /// Row-major linear key on a grid `width` columns wide.
    ///
    /// Only unique for positions with `0 <= y < width`; callers are expected
    /// to check bounds first.
    #[inline]
    pub fn key(self, width: usize) -> usize {
        self.x as usize * width + self.y as usize
    }
}

impl Hash for Position {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.hash(state);
        self.y.hash(state);
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.x.cmp(&other.x).then(self.y.cmp(&other.y))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add<Offset> for Position {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Offset) -> Self {
        self.shift(rhs.dx, rhs.dy)
    }
}

impl Sub for Position {
    type Output = Offset;
    #[inline]
    fn sub(self, rhs: Self) -> Offset {
        rhs.offset_to(self)
    }
}

// ---------------------------------------------------------------------------
// Offset
// ---------------------------------------------------------------------------

/// Difference between two positions.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Offset {
    pub dx: i32,
    pub dy: i32,
}

impl Offset {
    /// The eight unit steps: four orthogonal, then four diagonal.
    pub const DIRECTIONS: [Offset; 8] = [
        Offset::new(-1, 0),
        Offset::new(0, 1),
        Offset::new(1, 0),
        Offset::new(0, -1),
        Offset::new(-1, -1),
        Offset::new(-1, 1),
        Offset::new(1, 1),
        Offset::new(1, -1),
    ];

    #[inline]
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    /// Whether the step reaches one of the eight surrounding cells.
    #[inline]
    pub const fn is_adjacent(self) -> bool {
        self.dx.unsigned_abs() <= 1
            && self.dy.unsigned_abs() <= 1
            && !(self.dx == 0 && self.dy == 0)
    }

    /// An adjacent step along exactly one axis.
    #[inline]
    pub const fn is_orthogonal(self) -> bool {
        self.is_adjacent() && (self.dx == 0) != (self.dy == 0)
    }

    /// An adjacent step along both axes.
    #[inline]
    pub const fn is_diagonal(self) -> bool {
        self.dx.unsigned_abs() == 1 && self.dy.unsigned_abs() == 1
    }

    /// Component-wise sign, each in `-1..=1`.
    #[inline]
    pub const fn signum(self) -> Self {
        Self::new(self.dx.signum(), self.dy.signum())
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:+}, {:+})", self.dx, self.dy)
    }
}

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

/// The half-open rectangle `[0, height) x [0, width)` of valid cells.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    width: i32,
    height: i32,
}

impl Bounds {
    /// Bounds of a grid with `width` columns and `height` rows.
    /// Negative sizes are clamped to zero.
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self {
            width: if width < 0 { 0 } else { width },
            height: if height < 0 { 0 } else { height },
        }
    }

    /// Number of columns.
    #[inline]
    pub const fn width(self) -> i32 {
        self.width
    }

    /// Number of rows.
    #[inline]
    pub const fn height(self) -> i32 {
        self.height
    }

    /// Total number of cells.
    #[inline]
    pub const fn len(self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Whether the bounds contain no cell at all.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Whether `p` is a valid cell.
    #[inline]
    pub const fn contains(self, p: Position) -> bool {
        p.x >= 0 && p.x < self.height && p.y >= 0 && p.y < self.width
    }

    /// Row-major iterator over every position.
    #[inline]
    pub fn iter(self) -> BoundsIter {
        BoundsIter {
            bounds: self,
            cur: Position::ZERO,
        }
    }
}

impl IntoIterator for Bounds {
    type Item = Position;
    type IntoIter = BoundsIter;
    #[inline]
    fn into_iter(self) -> BoundsIter {
        self.iter()
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} rows x {} columns", self.height, self.width)
    }
}

// ---------------------------------------------------------------------------
// BoundsIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the positions in a [`Bounds`].
#[derive(Clone, Debug)]
pub struct BoundsIter {
    bounds: Bounds,
    cur: Position,
}

impl Iterator for BoundsIter {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        if self.bounds.is_empty() || self.cur.x >= self.bounds.height {
            return None;
        }
        let p = self.cur;
        self.cur.y += 1;
        if self.cur.y >= self.bounds.width {
            self.cur.y = 0;
            self.cur.x += 1;
        }
        Some(p)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.bounds.is_empty() || self.cur.x >= self.bounds.height {
            0
        } else {
            self.bounds.len() - self.cur.key(self.bounds.width as usize)
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BoundsIter {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
