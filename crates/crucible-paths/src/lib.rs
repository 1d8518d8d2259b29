//! Constrained-run shortest-path search over cell-cost grids.
//!
//! The engine finds the cheapest way across a [`CostGrid`] for a mover that
//! may not reverse, must turn after `max_run` consecutive steps in one
//! direction, and may only turn (or stop) after at least `min_run` steps.
//! Searching happens over an augmented state space of
//! `(position, heading, run length)` built lazily by [`StateSpace`].
//!
//! - **Dijkstra** search by default ([`Solver::new`])
//! - **A\*** search with any admissible, consistent [`Heuristic`]
//!   ([`Solver::with_heuristic`])
//! - **Path reconstruction** from the predecessor map kept in a
//!   [`Solution`]
//!
//! # Components
//!
//! | Type | Role |
//! |---|---|
//! | [`StateSpace`] | legal transitions and goal test |
//! | [`CostLedger`] | best known cost per state, only ever decreasing |
//! | [`Frontier`] | min-ordered queue with lazy invalidation of stale entries |
//! | [`Solver`] | the relaxation loop |
//! | [`Predecessors`] / [`Path`] | move sequence of the optimal route |
//!
//! [`CostGrid`]: crucible_core::CostGrid

mod error;
mod frontier;
mod heuristic;
mod ledger;
mod path;
mod rules;
mod solver;
mod state;

pub use error::SearchError;
pub use frontier::{Frontier, FrontierEntry};
pub use heuristic::{Heuristic, MinCostManhattan, Zero, manhattan};
pub use ledger::{CostLedger, UNREACHABLE};
pub use path::{Path, Predecessor, Predecessors, Solution, Step};
pub use rules::RunRules;
pub use solver::{SearchConfig, SearchEvent, SearchOutcome, SearchStats, Solver};
pub use state::{Edge, State, StateSpace};
