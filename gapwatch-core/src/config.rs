//! Trading configuration: risk budget, thresholds, account size.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// All recognized tuning knobs for one analysis run.
///
/// Passed by argument into every evaluation call; there is no process-wide
/// mutable configuration. Construct via struct literal or deserialize from
/// TOML/JSON (missing fields take defaults), then call [`validate`] before
/// running any analysis — the aggregator refuses invalid configs up front.
///
/// [`validate`]: TradingConfig::validate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TradingConfig {
    /// Fraction of the account risked per trade (0.02 = 2%).
    pub max_risk_per_trade: f64,

    /// Floor on reward/risk; the risk manager shapes targets to meet it exactly.
    pub min_risk_reward_ratio: f64,

    /// Cap on a single position as a fraction of the account (0.10 = 10%).
    pub max_position_size: f64,

    /// Minimum absolute gap (percent) for the gap momentum strategy.
    pub gap_threshold_percent: f64,

    /// Volume must be at least this multiple of average volume.
    pub volume_threshold_multiplier: f64,

    /// Capital base for position sizing, in dollars.
    pub account_size: f64,
}

impl Default for TradingConfig {
    fn default() -> Self {
        Self {
            max_risk_per_trade: 0.02,
            min_risk_reward_ratio: 2.0,
            max_position_size: 0.10,
            gap_threshold_percent: 3.0,
            volume_threshold_multiplier: 2.0,
            account_size: 100_000.0,
        }
    }
}

impl TradingConfig {
    /// Rejects any field outside its documented domain.
    ///
    /// All fields must be positive and finite, `min_risk_reward_ratio >= 1.0`,
    /// and the two account fractions must lie in (0, 1].
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positives = [
            ("max_risk_per_trade", self.max_risk_per_trade),
            ("min_risk_reward_ratio", self.min_risk_reward_ratio),
            ("max_position_size", self.max_position_size),
            ("gap_threshold_percent", self.gap_threshold_percent),
            ("volume_threshold_multiplier", self.volume_threshold_multiplier),
            ("account_size", self.account_size),
        ];
        for (field, value) in positives {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field, value });
            }
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        if self.min_risk_reward_ratio < 1.0 {
            return Err(ConfigError::RiskRewardBelowOne {
                value: self.min_risk_reward_ratio,
            });
        }

        for (field, value) in [
            ("max_risk_per_trade", self.max_risk_per_trade),
            ("max_position_size", self.max_position_size),
        ] {
            if value > 1.0 {
                return Err(ConfigError::FractionOutOfRange { field, value });
            }
        }

        Ok(())
    }

    /// Dollars of the account put at risk per trade.
    pub fn risk_budget(&self) -> f64 {
        self.account_size * self.max_risk_per_trade
    }
}
