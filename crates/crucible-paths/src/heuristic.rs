use crucible_core::{CostGrid, Point};

use crate::State;

/// Lower bound on the remaining cost from a state to the goal.
///
/// Estimates must be admissible (never above the true remaining cost) and
/// consistent (`h(s) <= cost(s, t) + h(t)` for every edge `s -> t`). The
/// solver detects a consistency breach when the frontier pops out of order
/// and reports it as an invariant violation.
pub trait Heuristic {
    fn estimate(&self, state: &State, goal: Point) -> u32;
}

/// The zero heuristic: plain Dijkstra search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Zero;

impl Heuristic for Zero {
    #[inline]
    fn estimate(&self, _state: &State, _goal: Point) -> u32 {
        0
    }
}

/// Manhattan distance scaled by the cheapest cell in the grid.
///
/// Every step enters a cell costing at least `min_cost` and changes the
/// Manhattan distance to the goal by exactly one, so the estimate is both
/// admissible and consistent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinCostManhattan {
    min_cost: u32,
}

impl MinCostManhattan {
    pub fn new(min_cost: u32) -> Self {
        Self { min_cost }
    }

    pub fn for_grid(grid: &CostGrid) -> Self {
        Self::new(grid.min_cost())
    }
}

impl Heuristic for MinCostManhattan {
    #[inline]
    fn estimate(&self, state: &State, goal: Point) -> u32 {
        manhattan(state.pos, goal).saturating_mul(self.min_cost)
    }
}

impl<F> Heuristic for F
where
    F: Fn(&State, Point) -> u32,
{
    #[inline]
    fn estimate(&self, state: &State, goal: Point) -> u32 {
        self(state, goal)
    }
}

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> u32 {
    a.x.abs_diff(b.x) + a.y.abs_diff(b.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_distance() {
        assert_eq!(manhattan(Point::new(0, 0), Point::new(3, 4)), 7);
        assert_eq!(manhattan(Point::new(3, 4), Point::new(0, 0)), 7);
        assert_eq!(manhattan(Point::new(-2, 1), Point::new(2, 1)), 4);
    }

    #[test]
    fn min_cost_manhattan_scales_by_cheapest_cell() {
        let grid = CostGrid::parse("93\n52").unwrap();
        let h = MinCostManhattan::for_grid(&grid);
        let goal = Point::new(1, 1);
        assert_eq!(h.estimate(&State::start(Point::ZERO), goal), 4);
        assert_eq!(h.estimate(&State::start(goal), goal), 0);
        assert_eq!(Zero.estimate(&State::start(Point::ZERO), goal), 0);
    }

    #[test]
    fn closures_are_heuristics() {
        let h = |s: &State, goal: Point| manhattan(s.pos, goal);
        assert_eq!(h.estimate(&State::start(Point::ZERO), Point::new(2, 2)), 4);
    }
}
