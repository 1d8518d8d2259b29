//! The relaxation loop.

use std::collections::HashSet;

use crucible_core::{CostGrid, Point};

use crate::frontier::{Frontier, FrontierEntry};
use crate::heuristic::{Heuristic, Zero};
use crate::ledger::{CostLedger, UNREACHABLE};
use crate::path::{Predecessors, Solution};
use crate::state::{State, StateSpace};
use crate::{RunRules, SearchError};

/// What to search for: run rules and endpoints.
///
/// Endpoints default to the top-left cell (start) and the bottom-right
/// cell (goal) of the grid being searched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    pub rules: RunRules,
    pub start: Option<Point>,
    pub goal: Option<Point>,
}

impl SearchConfig {
    pub fn new(rules: RunRules) -> Self {
        Self {
            rules,
            start: None,
            goal: None,
        }
    }

    pub fn with_start(mut self, start: Point) -> Self {
        self.start = Some(start);
        self
    }

    pub fn with_goal(mut self, goal: Point) -> Self {
        self.goal = Some(goal);
        self
    }
}

impl From<RunRules> for SearchConfig {
    fn from(rules: RunRules) -> Self {
        Self::new(rules)
    }
}

/// Counters collected during one solve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Frontier entries pushed, the start included.
    pub pushed: usize,
    /// Frontier entries popped.
    pub popped: usize,
    /// Popped entries superseded by a cheaper cost.
    pub stale: usize,
    /// Popped entries for states already finalized.
    pub duplicates: usize,
    /// States finalized.
    pub finalized: usize,
    /// Successful relaxations.
    pub relaxed: usize,
    /// Largest frontier size.
    pub max_frontier: usize,
}

/// Notable moments of a solve, reported to an observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchEvent {
    /// A state's best known cost dropped. `old` is `None` on first reach.
    Relaxed {
        state: State,
        old: Option<u32>,
        new: u32,
    },
    /// A state's cost became final.
    Finalized { state: State, cost: u32 },
    /// A superseded entry was discarded.
    Stale { state: State, cost: u32 },
    /// An entry for an already finalized state was discarded.
    Duplicate { state: State },
}

/// Result of a solve that ran to completion.
#[derive(Debug, Clone)]
pub enum SearchOutcome {
    Found(Solution),
    /// Every reachable state was finalized without reaching the goal.
    NoPathFound { stats: SearchStats },
}

impl SearchOutcome {
    /// The minimal cost, if a path exists.
    pub fn cost(&self) -> Option<u32> {
        self.solution().map(Solution::cost)
    }

    pub fn solution(&self) -> Option<&Solution> {
        match self {
            Self::Found(s) => Some(s),
            Self::NoPathFound { .. } => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn stats(&self) -> SearchStats {
        match self {
            Self::Found(s) => s.stats(),
            Self::NoPathFound { stats } => *stats,
        }
    }

    /// Fold a missing path into [`SearchError::NoPathFound`].
    pub fn into_result(self) -> Result<Solution, SearchError> {
        match self {
            Self::Found(s) => Ok(s),
            Self::NoPathFound { .. } => Err(SearchError::NoPathFound),
        }
    }
}

/// Cheapest-path search over a [`CostGrid`].
///
/// A solver only borrows the grid. Every call to [`solve`](Self::solve)
/// builds its own ledger, frontier and predecessor map, so solvers over the
/// same grid can run concurrently.
#[derive(Debug, Clone)]
pub struct Solver<'g, H = Zero> {
    grid: &'g CostGrid,
    heuristic: H,
}

impl<'g> Solver<'g, Zero> {
    /// A plain Dijkstra solver.
    pub fn new(grid: &'g CostGrid) -> Self {
        Self {
            grid,
            heuristic: Zero,
        }
    }
}

impl<'g, H: Heuristic> Solver<'g, H> {
    /// An A* solver. `heuristic` must be admissible and consistent.
    pub fn with_heuristic(grid: &'g CostGrid, heuristic: H) -> Self {
        Self { grid, heuristic }
    }

    #[inline]
    pub fn grid(&self) -> &'g CostGrid {
        self.grid
    }

    /// Minimal cost for `config`, or `None` if the goal is unreachable.
    pub fn min_cost(&self, config: &SearchConfig) -> Result<Option<u32>, SearchError> {
        Ok(self.solve(config)?.cost())
    }

    /// Run the search to completion.
    pub fn solve(&self, config: &SearchConfig) -> Result<SearchOutcome, SearchError> {
        self.solve_observed(config, |_| {})
    }

    /// Run the search, reporting every [`SearchEvent`] to `observer`.
    pub fn solve_observed(
        &self,
        config: &SearchConfig,
        mut observer: impl FnMut(SearchEvent),
    ) -> Result<SearchOutcome, SearchError> {
        config.rules.validate()?;
        let (start, goal) = self.endpoints(config)?;
        let space = StateSpace::new(self.grid, config.rules, goal);

        log::debug!(
            "crucible search {start} -> {goal} on {}x{} grid, runs {}..={}",
            self.grid.width(),
            self.grid.height(),
            config.rules.min_run,
            config.rules.max_run
        );

        let mut ledger = CostLedger::new();
        let mut frontier = Frontier::new();
        let mut finalized: HashSet<State> = HashSet::new();
        let mut predecessors = Predecessors::new();
        let mut stats = SearchStats::default();

        let origin = State::start(start);
        ledger.set(origin, 0)?;
        frontier.push(FrontierEntry {
            priority: self.heuristic.estimate(&origin, goal),
            cost: 0,
            state: origin,
        });
        stats.pushed += 1;

        let mut edges = Vec::with_capacity(4);
        let mut last_priority = 0;

        while let Some(current) = frontier.pop_min() {
            stats.popped += 1;
            let state = current.state;

            // Skip stale entries.
            if current.cost > ledger.get(&state) {
                stats.stale += 1;
                log::trace!("stale {state} at {}", current.cost);
                observer(SearchEvent::Stale {
                    state,
                    cost: current.cost,
                });
                continue;
            }
            if !finalized.insert(state) {
                stats.duplicates += 1;
                observer(SearchEvent::Duplicate { state });
                continue;
            }
            if current.priority < last_priority {
                return Err(SearchError::InvariantViolation(format!(
                    "frontier popped priority {} after {last_priority}; heuristic is not consistent",
                    current.priority
                )));
            }
            last_priority = current.priority;

            stats.finalized += 1;
            log::trace!("finalize {state} at {}", current.cost);
            observer(SearchEvent::Finalized {
                state,
                cost: current.cost,
            });

            if space.is_goal(&state) {
                stats.max_frontier = frontier.peak();
                log::debug!("crucible search found cost {} ({stats:?})", current.cost);
                return Ok(SearchOutcome::Found(Solution {
                    cost: current.cost,
                    goal: state,
                    stats,
                    predecessors,
                }));
            }

            edges.clear();
            space.neighbors(&state, &mut edges);

            for edge in &edges {
                let next = edge.to;
                if !self.grid.contains(next.pos) {
                    return Err(SearchError::InvariantViolation(format!(
                        "neighbor {next} of {state} is outside the grid"
                    )));
                }
                let Some(candidate) = current.cost.checked_add(edge.cost) else {
                    return Err(SearchError::InvariantViolation(format!(
                        "cost overflow entering {next}"
                    )));
                };
                if candidate >= ledger.get(&next) {
                    continue;
                }
                if finalized.contains(&next) {
                    return Err(SearchError::InvariantViolation(format!(
                        "finalized state {next} improved to {candidate}"
                    )));
                }

                let old = ledger.set(next, candidate)?;
                predecessors.record(next, state, edge.dir, edge.cost);
                frontier.push(FrontierEntry {
                    priority: candidate.saturating_add(self.heuristic.estimate(&next, goal)),
                    cost: candidate,
                    state: next,
                });
                stats.relaxed += 1;
                stats.pushed += 1;
                observer(SearchEvent::Relaxed {
                    state: next,
                    old: (old != UNREACHABLE).then_some(old),
                    new: candidate,
                });
            }
        }

        stats.max_frontier = frontier.peak();
        log::debug!("crucible search exhausted without reaching {goal} ({stats:?})");
        Ok(SearchOutcome::NoPathFound { stats })
    }

    fn endpoints(&self, config: &SearchConfig) -> Result<(Point, Point), SearchError> {
        let bounds = self.grid.bounds();
        let start = config.start.unwrap_or(bounds.min);
        let goal = match config.goal {
            Some(g) => g,
            None => bounds.last().unwrap_or(bounds.min),
        };
        if !bounds.contains(start) {
            return Err(SearchError::EndpointOutOfBounds {
                which: "start",
                pos: start,
            });
        }
        if !bounds.contains(goal) {
            return Err(SearchError::EndpointOutOfBounds {
                which: "goal",
                pos: goal,
            });
        }
        Ok((start, goal))
    }
}
