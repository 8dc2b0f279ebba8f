//! Configuration error taxonomy.
//!
//! Invalid configuration is the only caller-visible failure in the core:
//! it is surfaced before any per-symbol work begins. Strategy non-matches
//! and risk rejections are represented as absent values, never as errors.

/// A `TradingConfig` field outside its documented domain.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    #[error("min_risk_reward_ratio must be >= 1.0, got {value}")]
    RiskRewardBelowOne { value: f64 },

    #[error("{field} must be within (0, 1], got {value}")]
    FractionOutOfRange { field: &'static str, value: f64 },

    #[error("{field} must be finite, got {value}")]
    NotFinite { field: &'static str, value: f64 },
}
