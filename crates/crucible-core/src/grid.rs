//! The immutable cell-cost grid.
//!
//! A [`CostGrid`] is a rectangle of non-negative integer costs. The cost of
//! a cell is paid when a path *enters* it. Grids are usually parsed from
//! digit text, one line per row:
//!
//! ```text
//! 2413
//! 3215
//! ```

use crate::geom::{Point, Range};
use std::fmt;
use std::str::FromStr;

/// A read-only 2D grid of cell entry costs.
///
/// The grid never changes after construction, so a single instance can be
/// shared by reference between any number of concurrent searches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostGrid {
    cells: Vec<u32>,
    bounds: Range,
}

impl CostGrid {
    /// Build a grid from a row-major cell vector.
    ///
    /// Costs are not limited to single digits. Fails if either dimension is
    /// zero or does not fit an `i32` coordinate, or if
    /// `cells.len() != width * height`.
    pub fn from_cells(width: usize, height: usize, cells: Vec<u32>) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::Empty);
        }
        let too_large = GridError::TooLarge { width, height };
        let (Ok(w), Ok(h)) = (i32::try_from(width), i32::try_from(height)) else {
            return Err(too_large);
        };
        let Some(expected) = width.checked_mul(height) else {
            return Err(too_large);
        };
        if cells.len() != expected {
            return Err(GridError::SizeMismatch {
                expected,
                found: cells.len(),
            });
        }
        Ok(Self {
            cells,
            bounds: Range::new(0, 0, w, h),
        })
    }

    /// Parse a grid of single-digit costs.
    ///
    /// Leading and trailing whitespace of the whole text is ignored, but
    /// not whitespace inside a line. Every line must have the same width and
    /// contain only `0`–`9`.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        let s = s.trim();
        let mut cells = Vec::with_capacity(s.len());
        let mut width: Option<usize> = None;
        let mut height = 0;

        for (y, line) in s.lines().enumerate() {
            let mut x = 0;
            for ch in line.chars() {
                let Some(cost) = ch.to_digit(10) else {
                    return Err(GridError::InvalidDigit {
                        ch,
                        pos: Point::new(x as i32, y as i32),
                    });
                };
                cells.push(cost);
                x += 1;
            }
            match width {
                None => width = Some(x),
                Some(w) if w != x => {
                    return Err(GridError::InconsistentWidth {
                        row: y,
                        expected: w,
                        found: x,
                    });
                }
                Some(_) => {}
            }
            height += 1;
        }

        match width {
            Some(w) if w > 0 => Self::from_cells(w, height, cells),
            _ => Err(GridError::Empty),
        }
    }

    /// The bounding range `[(0,0), (width,height))`.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Returns the size as a Point (width = x, height = y).
    #[inline]
    pub fn size(&self) -> Point {
        self.bounds.size()
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Whether the grid contains the given point.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Entry cost of the cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<u32> {
        if !self.bounds.contains(p) {
            return None;
        }
        let idx = p.y as usize * self.width() as usize + p.x as usize;
        Some(self.cells[idx])
    }

    /// The cheapest cell in the grid.
    pub fn min_cost(&self) -> u32 {
        self.cells.iter().copied().min().unwrap_or(0)
    }

    /// Iterate over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.cells.chunks(self.width() as usize)
    }
}

impl FromStr for CostGrid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for CostGrid {
    /// Renders one line per row. Costs above 9 are written in full, so only
    /// digit grids round-trip through [`CostGrid::parse`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for cost in row {
                write!(f, "{cost}")?;
            }
        }
        Ok(())
    }
}

/// Errors that can occur when building a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// No rows, or rows with no cells.
    Empty,
    /// A row's width differs from the first row's.
    InconsistentWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A character other than `0`–`9` was found.
    InvalidDigit { ch: char, pos: Point },
    /// A cell vector does not match the requested dimensions.
    SizeMismatch { expected: usize, found: usize },
    /// Dimensions beyond `i32` coordinates or addressable cell counts.
    TooLarge { width: usize, height: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid: no cells"),
            Self::InconsistentWidth {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid: row {row} has width {found}, expected {expected}"
            ),
            Self::InvalidDigit { ch, pos } => write!(
                f,
                "grid: invalid cost \u{201c}{ch}\u{201d} at ({}, {})",
                pos.x, pos.y
            ),
            Self::SizeMismatch { expected, found } => {
                write!(f, "grid: expected {expected} cells, found {found}")
            }
            Self::TooLarge { width, height } => {
                write!(f, "grid: {width}x{height} is too large")
            }
        }
    }
}

impl std::error::Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = "\
241
321
325";

    #[test]
    fn parse_and_size() {
        let g = CostGrid::parse(SMALL).unwrap();
        assert_eq!(g.size(), Point::new(3, 3));
        assert_eq!(g.at(Point::new(0, 0)), Some(2));
        assert_eq!(g.at(Point::new(2, 0)), Some(1));
        assert_eq!(g.at(Point::new(2, 2)), Some(5));
        assert_eq!(g.at(Point::new(3, 0)), None);
        assert_eq!(g.at(Point::new(0, -1)), None);
        assert_eq!(g.min_cost(), 1);
    }

    #[test]
    fn parse_trims_surrounding_whitespace_and_crlf() {
        let g: CostGrid = "\n12\r\n34\r\n\n".parse().unwrap();
        assert_eq!(g.size(), Point::new(2, 2));
        assert_eq!(g.at(Point::new(1, 1)), Some(4));
    }

    #[test]
    fn display_round_trips_digit_grids() {
        let g = CostGrid::parse(SMALL).unwrap();
        assert_eq!(g.to_string(), SMALL);
        assert_eq!(CostGrid::parse(&g.to_string()).unwrap(), g);
    }

    #[test]
    fn rows_are_row_major() {
        let g = CostGrid::parse("12\n34").unwrap();
        let rows: Vec<&[u32]> = g.rows().collect();
        assert_eq!(rows, vec![&[1, 2][..], &[3, 4][..]]);
    }

    #[test]
    fn inconsistent_width_error() {
        let err = CostGrid::parse("123\n12").unwrap_err();
        assert_eq!(
            err,
            GridError::InconsistentWidth {
                row: 1,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn invalid_digit_error() {
        let err = CostGrid::parse("12\n3x").unwrap_err();
        assert_eq!(
            err,
            GridError::InvalidDigit {
                ch: 'x',
                pos: Point::new(1, 1)
            }
        );
        assert!(CostGrid::parse("1 2").is_err());
        assert!(CostGrid::parse("-1").is_err());
    }

    #[test]
    fn empty_input_error() {
        assert_eq!(CostGrid::parse(""), Err(GridError::Empty));
        assert_eq!(CostGrid::parse("  \n "), Err(GridError::Empty));
    }

    #[test]
    fn from_cells_checks_dimensions() {
        let g = CostGrid::from_cells(2, 1, vec![10, 20]).unwrap();
        assert_eq!(g.at(Point::new(1, 0)), Some(20));
        assert_eq!(g.to_string(), "1020");
        assert_eq!(
            CostGrid::from_cells(2, 2, vec![1, 2, 3]),
            Err(GridError::SizeMismatch {
                expected: 4,
                found: 3
            })
        );
        assert_eq!(CostGrid::from_cells(0, 3, vec![]), Err(GridError::Empty));
    }

    #[test]
    fn from_cells_rejects_oversized_dimensions() {
        let wide = i32::MAX as usize + 1;
        assert_eq!(
            CostGrid::from_cells(wide, 1, vec![]),
            Err(GridError::TooLarge {
                width: wide,
                height: 1
            })
        );
        assert_eq!(
            CostGrid::from_cells(usize::MAX, 2, vec![]),
            Err(GridError::TooLarge {
                width: usize::MAX,
                height: 2
            })
        );
        assert_eq!(
            CostGrid::from_cells(1, usize::MAX, vec![1]),
            Err(GridError::TooLarge {
                width: 1,
                height: usize::MAX
            })
        );
    }

    #[test]
    fn error_messages() {
        let err = CostGrid::parse("1\n12").unwrap_err();
        assert_eq!(err.to_string(), "grid: row 1 has width 2, expected 1");
    }

    #[test]
    fn grid_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CostGrid>();
    }
}
