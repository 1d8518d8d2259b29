//! **crucible-core** — geometry primitives and the cell-cost grid.
//!
//! This crate provides the types shared by the crucible search engine:
//! integer points and half-open ranges, the four cardinal directions, and
//! [`CostGrid`], an immutable rectangle of non-negative entry costs parsed
//! from digit text.

pub mod geom;
pub mod grid;

pub use geom::{Direction, Point, Range};
pub use grid::{CostGrid, GridError};
