//! The closed set of rule-based strategies.
//!
//! Each strategy is a pure evaluation from a snapshot plus config to at most
//! one raw candidate. The set is a closed enum rather than a trait-object
//! registry: adding a strategy means adding a variant and a match arm, and
//! the compiler checks exhaustiveness everywhere the set is consumed.

mod gap_momentum;
mod premarket_momentum;
mod volume_breakout;

use serde::{Deserialize, Serialize};

use crate::config::TradingConfig;
use crate::domain::{FeatureSnapshot, SignalDirection};

/// One of the three rule-based evaluation strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    GapMomentum,
    VolumeBreakout,
    PremarketMomentum,
}

impl Strategy {
    /// The fixed evaluation order used by the aggregator.
    pub const ALL: [Strategy; 3] = [
        Strategy::GapMomentum,
        Strategy::VolumeBreakout,
        Strategy::PremarketMomentum,
    ];

    /// Human-readable name carried into signals and reports.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::GapMomentum => "Gap Momentum",
            Strategy::VolumeBreakout => "Volume Breakout",
            Strategy::PremarketMomentum => "Premarket Momentum",
        }
    }

    /// Evaluates one snapshot. Returns `None` when the strategy does not
    /// qualify or a required input field is missing — never an error.
    pub fn evaluate(
        &self,
        snapshot: &FeatureSnapshot,
        config: &TradingConfig,
    ) -> Option<RawCandidate> {
        if snapshot.current_price <= 0.0 {
            return None;
        }
        match self {
            Strategy::GapMomentum => gap_momentum::evaluate(snapshot, config),
            Strategy::VolumeBreakout => volume_breakout::evaluate(snapshot, config),
            Strategy::PremarketMomentum => premarket_momentum::evaluate(snapshot, config),
        }
    }
}

/// Supporting metrics a strategy observed when it fired.
///
/// Only the metrics relevant to the firing strategy are populated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateMetrics {
    pub gap_percent: Option<f64>,
    pub volume_ratio: Option<f64>,
    pub premarket_move_percent: Option<f64>,
}

/// An unpriced observation produced by a strategy.
///
/// Consumed only by the risk manager; never persisted. `raw_confidence` is
/// bounded to [0, 1] by every strategy's scoring curve.
#[derive(Debug, Clone, PartialEq)]
pub struct RawCandidate {
    pub symbol: String,
    pub strategy: Strategy,
    pub direction: SignalDirection,
    pub raw_confidence: f64,
    pub current_price: f64,
    pub metrics: CandidateMetrics,
    pub reasoning: String,
}

/// Bounded, strictly increasing score: `score / (1 + score)`.
///
/// Maps [0, ∞) onto [0, 1); strictly increasing in `score`, so a confidence
/// built on a score that is strictly increasing in each input feature is
/// itself strictly increasing in each feature.
pub(crate) fn saturating_confidence(score: f64) -> f64 {
    debug_assert!(score >= 0.0, "confidence score must be non-negative");
    score / (1.0 + score)
}
