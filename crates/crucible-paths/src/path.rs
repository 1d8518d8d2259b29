//! Predecessor bookkeeping and reconstruction of the optimal route.

use std::collections::HashMap;

use crucible_core::{CostGrid, Direction, Point};

use crate::{SearchStats, State};

/// How the search last improved a state: the state it came from, the move
/// it made, and the cost of the cell it entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Predecessor {
    pub state: State,
    pub dir: Direction,
    pub cost: u32,
}

/// Map from each reached state to its best known predecessor.
#[derive(Debug, Clone, Default)]
pub struct Predecessors {
    map: HashMap<State, Predecessor>,
}

impl Predecessors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record (or overwrite) how `to` was reached.
    pub fn record(&mut self, to: State, from: State, dir: Direction, cost: u32) {
        self.map.insert(
            to,
            Predecessor {
                state: from,
                dir,
                cost,
            },
        );
    }

    #[inline]
    pub fn get(&self, state: &State) -> Option<&Predecessor> {
        self.map.get(state)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Walk back from `end` to the state with no predecessor and return the
    /// steps in forward order.
    ///
    /// The chain is acyclic for any finalized state: its predecessor was
    /// finalized before it and finalized states are never improved.
    pub fn trace(&self, end: State) -> Path {
        let mut steps = Vec::new();
        let mut cur = end;
        while let Some(p) = self.map.get(&cur) {
            steps.push(Step {
                from: p.state.pos,
                to: cur.pos,
                dir: p.dir,
                cost: p.cost,
                run: cur.run,
            });
            cur = p.state;
        }
        steps.reverse();
        Path {
            start: cur.pos,
            steps,
        }
    }
}

/// A single move of a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step {
    pub from: Point,
    pub to: Point,
    pub dir: Direction,
    /// Cost of entering `to`.
    pub cost: u32,
    /// Run length after this step.
    pub run: u32,
}

/// A forward-ordered sequence of moves from the start cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    start: Point,
    steps: Vec<Step>,
}

impl Path {
    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    /// The final cell: the goal for a solved path.
    pub fn end(&self) -> Point {
        self.steps.last().map_or(self.start, |s| s.to)
    }

    #[inline]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn directions(&self) -> impl Iterator<Item = Direction> + '_ {
        self.steps.iter().map(|s| s.dir)
    }

    /// Every visited cell, start included.
    pub fn cells(&self) -> Vec<Point> {
        std::iter::once(self.start)
            .chain(self.steps.iter().map(|s| s.to))
            .collect()
    }

    /// Sum of entered cell costs. The start cell is not paid for.
    pub fn cost(&self) -> u32 {
        self.steps.iter().map(|s| s.cost).sum()
    }

    /// Maximal straight segments as `(direction, length)` pairs.
    pub fn runs(&self) -> Vec<(Direction, u32)> {
        let mut runs: Vec<(Direction, u32)> = Vec::new();
        for dir in self.directions() {
            match runs.last_mut() {
                Some((d, n)) if *d == dir => *n += 1,
                _ => runs.push((dir, 1)),
            }
        }
        runs
    }

    /// Longest straight segment.
    pub fn max_run(&self) -> u32 {
        self.runs().iter().map(|&(_, n)| n).max().unwrap_or(0)
    }

    /// Draw the grid with each entered cell replaced by the arrow of the
    /// move that entered it.
    pub fn render(&self, grid: &CostGrid) -> String {
        let mut rows: Vec<Vec<char>> = grid
            .rows()
            .map(|row| {
                row.iter()
                    .map(|&c| char::from_digit(c, 10).unwrap_or('#'))
                    .collect()
            })
            .collect();
        for step in &self.steps {
            if let Some(cell) = rows
                .get_mut(step.to.y as usize)
                .and_then(|row| row.get_mut(step.to.x as usize))
            {
                *cell = step.dir.arrow();
            }
        }
        rows.into_iter()
            .map(|row| row.into_iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// A successful search: the minimal cost plus what is needed to rebuild
/// the route.
#[derive(Debug, Clone)]
pub struct Solution {
    pub(crate) cost: u32,
    pub(crate) goal: State,
    pub(crate) stats: SearchStats,
    pub(crate) predecessors: Predecessors,
}

impl Solution {
    /// Minimal total cost, excluding the start cell.
    #[inline]
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// The finalized goal state.
    #[inline]
    pub fn goal(&self) -> State {
        self.goal
    }

    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    #[inline]
    pub fn predecessors(&self) -> &Predecessors {
        &self.predecessors
    }

    /// Rebuild the optimal route. Performs no search and may be called any
    /// number of times.
    pub fn path(&self) -> Path {
        self.predecessors.trace(self.goal)
    }
}
