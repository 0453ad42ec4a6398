use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::alpha_beta_searcher::Score;
use crate::evaluate::{
    PositionalEvaluator, WeightTable, BASIS_WEIGHTS, DEFAULT_PHASE_THRESHOLD, GROUP3_WEIGHTS,
};

use super::move_orderer::PositionalMoveOrderer;

/// Everything that distinguishes one playing strategy from another. The value
/// is immutable once handed to a search; use the `with_*` builders to derive
/// variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StrategyConfig {
    max_depth: u8,
    weights: WeightTable,
    phase_threshold: u8,
    material_scale: Score,
    move_ordering: bool,
}

impl StrategyConfig {
    /// Four plies over the basis table, candidates in board order.
    pub fn basis() -> Self {
        Self {
            max_depth: 4,
            weights: BASIS_WEIGHTS,
            phase_threshold: DEFAULT_PHASE_THRESHOLD,
            material_scale: 1,
            move_ordering: false,
        }
    }

    /// Two plies over the group3 table with candidates sorted by weight.
    pub fn group3() -> Self {
        Self {
            max_depth: 2,
            weights: GROUP3_WEIGHTS,
            phase_threshold: DEFAULT_PHASE_THRESHOLD,
            material_scale: 1,
            move_ordering: true,
        }
    }

    pub fn with_max_depth(self, max_depth: u8) -> Self {
        Self { max_depth, ..self }
    }

    pub fn with_weights(self, weights: WeightTable) -> Self {
        Self { weights, ..self }
    }

    pub fn with_phase_threshold(self, phase_threshold: u8) -> Self {
        Self {
            phase_threshold,
            ..self
        }
    }

    pub fn with_material_scale(self, material_scale: Score) -> Self {
        Self {
            material_scale,
            ..self
        }
    }

    pub fn with_move_ordering(self, move_ordering: bool) -> Self {
        Self {
            move_ordering,
            ..self
        }
    }

    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }

    pub fn weights(&self) -> &WeightTable {
        &self.weights
    }

    pub fn phase_threshold(&self) -> u8 {
        self.phase_threshold
    }

    pub fn material_scale(&self) -> Score {
        self.material_scale
    }

    pub fn move_ordering(&self) -> bool {
        self.move_ordering
    }

    pub fn evaluator(&self) -> PositionalEvaluator {
        PositionalEvaluator::new(self.weights, self.phase_threshold, self.material_scale)
    }

    pub fn move_orderer(&self) -> PositionalMoveOrderer {
        PositionalMoveOrderer::new(self.weights)
    }
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self::basis()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    Basis,
    Group3,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown strategy {name:?}, expected `basis` or `group3`")]
pub struct UnknownStrategyError {
    name: String,
}

impl Strategy {
    pub fn config(self) -> StrategyConfig {
        match self {
            Strategy::Basis => StrategyConfig::basis(),
            Strategy::Group3 => StrategyConfig::group3(),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Strategy::Basis => "basis",
            Strategy::Group3 => "group3",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Strategy {
    type Err = UnknownStrategyError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_ascii_lowercase().as_str() {
            "basis" => Ok(Strategy::Basis),
            "group3" => Ok(Strategy::Group3),
            _ => Err(UnknownStrategyError {
                name: name.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_configs() {
        let basis = StrategyConfig::basis();
        assert_eq!(basis.max_depth(), 4);
        assert_eq!(basis.weights(), &BASIS_WEIGHTS);
        assert_eq!(basis.phase_threshold(), 50);
        assert_eq!(basis.material_scale(), 1);
        assert!(!basis.move_ordering());

        let group3 = StrategyConfig::group3();
        assert_eq!(group3.max_depth(), 2);
        assert_eq!(group3.weights(), &GROUP3_WEIGHTS);
        assert!(group3.move_ordering());
    }

    #[test]
    fn test_builders_leave_other_fields() {
        let config = StrategyConfig::group3()
            .with_max_depth(6)
            .with_material_scale(2);
        assert_eq!(config.max_depth(), 6);
        assert_eq!(config.material_scale(), 2);
        assert_eq!(config.weights(), &GROUP3_WEIGHTS);
        assert_eq!(config.phase_threshold(), 50);
        assert!(config.move_ordering());
        assert_eq!(config.evaluator().material_scale(), 2);
    }

    #[test]
    fn test_parse_strategy() {
        assert_eq!("basis".parse::<Strategy>(), Ok(Strategy::Basis));
        assert_eq!("Group3".parse::<Strategy>(), Ok(Strategy::Group3));
        assert!("minimax".parse::<Strategy>().is_err());
        assert_eq!(Strategy::Group3.to_string(), "group3");
        assert_eq!(Strategy::Basis.config(), StrategyConfig::basis());
    }
}
