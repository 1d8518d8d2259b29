//! The augmented search state and its transition rules.

use crucible_core::{CostGrid, Direction, Point};
use std::fmt;

use crate::RunRules;

/// A search state: where the mover is, how it got there, and how long it
/// has been going straight.
///
/// Identity is the full tuple. Two states with the same position, heading
/// and run length are the same state however they were reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct State {
    pub pos: Point,
    /// Direction of the last move; `None` before the first move.
    pub heading: Option<Direction>,
    /// Consecutive moves made in `heading`. Zero only for the start state.
    pub run: u32,
}

impl State {
    /// The state before any move has been made.
    #[inline]
    pub const fn start(pos: Point) -> Self {
        Self {
            pos,
            heading: None,
            run: 0,
        }
    }

    /// Whether this is a start state.
    #[inline]
    pub const fn is_start(&self) -> bool {
        self.heading.is_none()
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.heading {
            Some(d) => write!(f, "{} {}x{}", self.pos, d, self.run),
            None => write!(f, "{} start", self.pos),
        }
    }
}

/// A transition produced by [`StateSpace::neighbors`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub to: State,
    pub dir: Direction,
    /// Cost of the cell being entered.
    pub cost: u32,
}

/// Legal transitions over a grid under a set of [`RunRules`].
///
/// States are never enumerated up front; neighbours are computed on demand
/// from grid arithmetic.
#[derive(Debug, Clone, Copy)]
pub struct StateSpace<'g> {
    grid: &'g CostGrid,
    rules: RunRules,
    goal: Point,
}

impl<'g> StateSpace<'g> {
    pub fn new(grid: &'g CostGrid, rules: RunRules, goal: Point) -> Self {
        Self { grid, rules, goal }
    }

    #[inline]
    pub fn grid(&self) -> &'g CostGrid {
        self.grid
    }

    #[inline]
    pub fn rules(&self) -> RunRules {
        self.rules
    }

    #[inline]
    pub fn goal(&self) -> Point {
        self.goal
    }

    /// Append the transitions out of `state` into `buf`. The caller clears
    /// `buf` before calling.
    ///
    /// Reversing is never allowed. Going straight needs `run < max_run`;
    /// turning needs the start state or `run >= min_run`. Moves off the grid
    /// are left out.
    pub fn neighbors(&self, state: &State, buf: &mut Vec<Edge>) {
        for dir in Direction::ALL {
            let run = match state.heading {
                Some(h) if h.reverse() == dir => continue,
                Some(h) if h == dir => {
                    if state.run >= self.rules.max_run {
                        continue;
                    }
                    state.run + 1
                }
                _ => {
                    if !state.is_start() && state.run < self.rules.min_run {
                        continue;
                    }
                    1
                }
            };
            let pos = state.pos.step(dir);
            let Some(cost) = self.grid.at(pos) else {
                continue;
            };
            buf.push(Edge {
                to: State {
                    pos,
                    heading: Some(dir),
                    run,
                },
                dir,
                cost,
            });
        }
    }

    /// Whether the search may stop at `state`.
    ///
    /// The mover has to be on the goal cell having completed a run of at
    /// least `min_run` steps. With `min_run == 1` any arrival counts, and so
    /// does starting on the goal.
    #[inline]
    pub fn is_goal(&self, state: &State) -> bool {
        state.pos == self.goal && (self.rules.min_run <= 1 || state.run >= self.rules.min_run)
    }
}
