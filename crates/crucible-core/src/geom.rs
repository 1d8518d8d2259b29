//! Geometry primitives: [`Point`], [`Range`] and [`Direction`].
//!
//! Points use grid coordinates: `x` is the column, `y` is the row, and the
//! origin is the top-left cell. Y grows down.

use std::fmt;

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A 2D integer point. X is the column, Y is the row.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return a point shifted by (dx, dy).
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The adjacent point one step in direction `d`.
    #[inline]
    pub const fn step(self, d: Direction) -> Self {
        let delta = d.delta();
        self.shift(delta.x, delta.y)
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    /// Row-major order.
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// One of the four cardinal moves on the grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// All directions, clockwise from `Up`.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// The opposite direction.
    #[inline]
    pub const fn reverse(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Right => Self::Left,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
        }
    }

    /// Unit offset of one step in this direction.
    #[inline]
    pub const fn delta(self) -> Point {
        match self {
            Self::Up => Point::new(0, -1),
            Self::Right => Point::new(1, 0),
            Self::Down => Point::new(0, 1),
            Self::Left => Point::new(-1, 0),
        }
    }

    /// Arrow glyph used when drawing paths.
    #[inline]
    pub const fn arrow(self) -> char {
        match self {
            Self::Up => '^',
            Self::Right => '>',
            Self::Down => 'v',
            Self::Left => '<',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Up => "up",
            Self::Right => "right",
            Self::Down => "down",
            Self::Left => "left",
        };
        f.write_str(name)
    }
}

// ---------------------------------------------------------------------------
// Range
// ---------------------------------------------------------------------------

/// A half-open rectangle \[min, max). `min` is inclusive, `max` is exclusive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Point,
    pub max: Point,
}

impl Range {
    /// Create a new range from two corners and auto-canonicalize so that
    /// `min` ≤ `max` on each axis.
    #[inline]
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: Point::new(x0.min(x1), y0.min(y1)),
            max: Point::new(x0.max(x1), y0.max(y1)),
        }
    }

    /// Size as a `Point` (width = max.x - min.x, height = max.y - min.y).
    #[inline]
    pub fn size(self) -> Point {
        Point::new(self.max.x - self.min.x, self.max.y - self.min.y)
    }

    /// Width of the range.
    #[inline]
    pub fn width(self) -> i32 {
        self.max.x - self.min.x
    }

    /// Height of the range.
    #[inline]
    pub fn height(self) -> i32 {
        self.max.y - self.min.y
    }

    /// Whether the range has zero or negative area.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    /// Whether `p` is inside the half-open range.
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        p.x >= self.min.x && p.x < self.max.x && p.y >= self.min.y && p.y < self.max.y
    }

    /// The last (bottom-right) point inside the range, or `None` if empty.
    #[inline]
    pub fn last(self) -> Option<Point> {
        if self.is_empty() {
            None
        } else {
            Some(self.max.shift(-1, -1))
        }
    }

    /// Points on the outer ring of the range, row-major.
    ///
    /// These are the candidate entry cells for boundary sweeps.
    pub fn border(self) -> impl Iterator<Item = Point> {
        self.iter().filter(move |p| {
            p.x == self.min.x || p.y == self.min.y || p.x == self.max.x - 1 || p.y == self.max.y - 1
        })
    }

    /// Row-major iterator over every point in the range.
    #[inline]
    pub fn iter(self) -> RangeIter {
        RangeIter {
            range: self,
            cur: self.min,
        }
    }
}

// ---------------------------------------------------------------------------
// RangeIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the points in a [`Range`].
#[derive(Clone, Debug)]
pub struct RangeIter {
    range: Range,
    cur: Point,
}

impl Iterator for RangeIter {
    type Item = Point;

    #[inline]
    fn next(&mut self) -> Option<Point> {
        if self.cur.y >= self.range.max.y || self.range.is_empty() {
            return None;
        }
        let p = self.cur;
        self.cur.x += 1;
        if self.cur.x >= self.range.max.x {
            self.cur.x = self.range.min.x;
            self.cur.y += 1;
        }
        Some(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_offsets_both_axes() {
        assert_eq!(Point::new(1, 2).shift(3, -4), Point::new(4, -2));
    }

    #[test]
    fn point_order_is_row_major() {
        assert!(Point::new(5, 0) < Point::new(0, 1));
        assert!(Point::new(0, 1) < Point::new(1, 1));
    }

    #[test]
    fn step_follows_screen_coordinates() {
        let p = Point::new(2, 2);
        assert_eq!(p.step(Direction::Up), Point::new(2, 1));
        assert_eq!(p.step(Direction::Right), Point::new(3, 2));
        assert_eq!(p.step(Direction::Down), Point::new(2, 3));
        assert_eq!(p.step(Direction::Left), Point::new(1, 2));
    }

    #[test]
    fn reverse_is_an_involution() {
        for d in Direction::ALL {
            assert_ne!(d, d.reverse());
            assert_eq!(d, d.reverse().reverse());
            let p = Point::new(3, 3);
            assert_eq!(p.step(d).step(d.reverse()), p);
        }
    }

    #[test]
    fn range_basics() {
        let r = Range::new(0, 0, 3, 2);
        assert_eq!(r.size(), Point::new(3, 2));
        assert!(!r.is_empty());
        assert!(r.contains(Point::new(0, 0)));
        assert!(r.contains(Point::new(2, 1)));
        assert!(!r.contains(Point::new(3, 0)));
        assert!(!r.contains(Point::new(0, 2)));
        assert!(!r.contains(Point::new(-1, 0)));
        assert_eq!(r.last(), Some(Point::new(2, 1)));
    }

    #[test]
    fn range_auto_canonicalize() {
        let r = Range::new(3, 2, 0, 0);
        assert_eq!(r.min, Point::new(0, 0));
        assert_eq!(r.max, Point::new(3, 2));
    }

    #[test]
    fn range_iter_count() {
        let r = Range::new(0, 0, 3, 2);
        let pts: Vec<_> = r.iter().collect();
        assert_eq!(pts.len(), 6);
        assert_eq!(pts[0], Point::new(0, 0));
        assert_eq!(pts[5], Point::new(2, 1));
    }

    #[test]
    fn empty_range() {
        let r = Range::new(0, 0, 0, 0);
        assert!(r.is_empty());
        assert_eq!(r.last(), None);
        assert_eq!(r.iter().count(), 0);
    }

    #[test]
    fn border_skips_interior() {
        let r = Range::new(0, 0, 4, 3);
        let border: Vec<_> = r.border().collect();
        assert_eq!(border.len(), 10);
        assert!(!border.contains(&Point::new(1, 1)));
        assert!(!border.contains(&Point::new(2, 1)));
        assert!(border.contains(&Point::new(3, 2)));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn direction_round_trip() {
        let json = serde_json::to_string(&Direction::Left).unwrap();
        let back: Direction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Direction::Left);
    }

    #[test]
    fn range_round_trip() {
        let rng = Range::new(1, 2, 10, 20);
        let json = serde_json::to_string(&rng).unwrap();
        let back: Range = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rng);
    }
}
