use crate::SearchError;

/// Bounds on how many consecutive steps may be taken in one direction.
///
/// A mover must take at least `min_run` steps before it may turn or stop,
/// and may take at most `max_run` steps before it has to turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunRules {
    pub min_run: u32,
    pub max_run: u32,
}

impl RunRules {
    /// Ordinary crucible: turn whenever, at most three steps straight.
    pub const BASIC: Self = Self {
        min_run: 1,
        max_run: 3,
    };

    /// Ultra crucible: at least four steps before turning or stopping, at
    /// most ten.
    pub const ULTRA: Self = Self {
        min_run: 4,
        max_run: 10,
    };

    /// Create validated rules. Requires `1 <= min_run <= max_run`.
    pub fn new(min_run: u32, max_run: u32) -> Result<Self, SearchError> {
        let rules = Self { min_run, max_run };
        rules.validate()?;
        Ok(rules)
    }

    /// Check the bounds, for rules built by struct literal or deserialized.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.min_run == 0 || self.min_run > self.max_run {
            return Err(SearchError::InvalidRules {
                min_run: self.min_run,
                max_run: self.max_run,
            });
        }
        Ok(())
    }
}

impl Default for RunRules {
    fn default() -> Self {
        Self::BASIC
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use crate::SearchConfig;
    use crucible_core::Point;

    #[test]
    fn search_config_round_trip() {
        let config = SearchConfig::new(RunRules::ULTRA).with_goal(Point::new(3, 4));
        let json = serde_json::to_string(&config).unwrap();
        let back: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn deserialized_rules_are_validated_on_use() {
        let rules: RunRules = serde_json::from_str(r#"{"min_run":0,"max_run":3}"#).unwrap();
        assert!(rules.validate().is_err());
    }
}
