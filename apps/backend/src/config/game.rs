use super::var_or;
use crate::error::AppError;

pub const DEFAULT_CONSENSUS_RATIO: f64 = 0.75;

/// Tunable game rules.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameRules {
    /// Fraction of players whose votes close an event in games with more
    /// than three players. The threshold is `ceil(players * ratio)`; only
    /// float noise of a few ULPs is absorbed, so any ratio measurably above
    /// `k / players` needs `k + 1` votes.
    pub consensus_ratio: f64,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            consensus_ratio: DEFAULT_CONSENSUS_RATIO,
        }
    }
}

impl GameRules {
    pub fn from_env() -> Result<Self, AppError> {
        let rules = Self {
            consensus_ratio: var_or("BINGO_CONSENSUS_RATIO", DEFAULT_CONSENSUS_RATIO)?,
        };
        rules.validate()?;
        Ok(rules)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        let r = self.consensus_ratio;
        if !(r.is_finite() && r > 0.0 && r <= 1.0) {
            return Err(AppError::config(format!(
                "BINGO_CONSENSUS_RATIO must be in (0, 1], got {r}"
            )));
        }
        Ok(())
    }
}
