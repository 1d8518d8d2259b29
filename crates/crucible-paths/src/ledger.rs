use std::collections::HashMap;

use crate::{SearchError, State};

/// Sentinel cost of a state the search has not reached.
pub const UNREACHABLE: u32 = u32::MAX;

/// Best known cumulative cost per state.
///
/// Entries only ever decrease. States are recorded lazily as the search
/// reaches them; the ledger lives for a single solve.
#[derive(Debug, Clone, Default)]
pub struct CostLedger {
    costs: HashMap<State, u32>,
}

impl CostLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Best known cost of `state`, or [`UNREACHABLE`].
    #[inline]
    pub fn get(&self, state: &State) -> u32 {
        self.costs.get(state).copied().unwrap_or(UNREACHABLE)
    }

    /// Lower the recorded cost of `state` and return the previous value.
    ///
    /// Fails with [`SearchError::InvariantViolation`] unless `cost` is
    /// strictly below the current entry.
    pub fn set(&mut self, state: State, cost: u32) -> Result<u32, SearchError> {
        let old = self.get(&state);
        if cost >= old {
            return Err(SearchError::InvariantViolation(format!(
                "ledger entry for {state} would rise from {old} to {cost}"
            )));
        }
        self.costs.insert(state, cost);
        Ok(old)
    }

    /// Number of states reached so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.costs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crucible_core::Point;

    #[test]
    fn absent_states_are_unreachable() {
        let ledger = CostLedger::new();
        assert_eq!(ledger.get(&State::start(Point::ZERO)), UNREACHABLE);
        assert!(ledger.is_empty());
    }

    #[test]
    fn set_only_decreases() {
        let mut ledger = CostLedger::new();
        let s = State::start(Point::new(1, 2));
        assert_eq!(ledger.set(s, 10), Ok(UNREACHABLE));
        assert_eq!(ledger.set(s, 7), Ok(10));
        assert_eq!(ledger.get(&s), 7);
        assert!(matches!(
            ledger.set(s, 7),
            Err(SearchError::InvariantViolation(_))
        ));
        assert!(ledger.set(s, 9).is_err());
        assert_eq!(ledger.get(&s), 7);
        assert_eq!(ledger.len(), 1);
    }
}
