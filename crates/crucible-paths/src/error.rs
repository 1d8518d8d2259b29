use crucible_core::Point;
use std::fmt;

/// Errors reported by the search engine.
///
/// An unreachable goal is not an error: the solver reports it as
/// [`SearchOutcome::NoPathFound`](crate::SearchOutcome::NoPathFound).
/// [`SearchError::NoPathFound`] only exists for callers that fold the
/// outcome into a `Result` with
/// [`SearchOutcome::into_result`](crate::SearchOutcome::into_result).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// `min_run` is zero or exceeds `max_run`.
    InvalidRules { min_run: u32, max_run: u32 },
    /// The start or goal lies outside the grid.
    EndpointOutOfBounds { which: &'static str, pos: Point },
    /// Internal bookkeeping was breached; the answer would be wrong.
    InvariantViolation(String),
    /// The frontier was exhausted without finalizing a goal state.
    NoPathFound,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRules { min_run, max_run } => write!(
                f,
                "invalid run rules: need 1 <= min_run <= max_run, got min_run={min_run} max_run={max_run}"
            ),
            Self::EndpointOutOfBounds { which, pos } => {
                write!(f, "{which} {pos} is outside the grid")
            }
            Self::InvariantViolation(msg) => write!(f, "search invariant violated: {msg}"),
            Self::NoPathFound => write!(f, "no path found"),
        }
    }
}

impl std::error::Error for SearchError {}
