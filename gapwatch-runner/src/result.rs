//! Analysis result and summary statistics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use gapwatch_core::{Signal, SignalDirection};

/// Complete result of one analysis run.
///
/// Signals are ranked (best first) and the summary is computed over the
/// generated set. Read-only after construction; serialize to JSON for the
/// reporting surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Ranked signals, best first.
    pub signals: Vec<Signal>,

    /// Aggregate statistics over the generated signals.
    pub summary: Summary,

    /// When the run finished.
    pub timestamp: DateTime<Utc>,

    /// How long the run took (seconds).
    pub duration_secs: f64,
}

impl AnalysisResult {
    /// Keeps only the top `n` ranked signals, recomputing the summary over
    /// the kept set. `total_analyzed` is unchanged — it counts snapshots,
    /// not signals.
    pub fn top(mut self, n: usize) -> Self {
        if self.signals.len() > n {
            self.signals.truncate(n);
            self.summary = Summary::from_signals(self.summary.total_analyzed, &self.signals);
        }
        self
    }
}

/// Aggregate statistics over one run's generated signals.
///
/// Averages are 0.0 when no signals were generated; no division by zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Number of snapshots analyzed (not the number of signals).
    pub total_analyzed: usize,
    pub signals_generated: usize,
    pub avg_confidence: f64,
    pub avg_risk_reward: f64,
    pub buy_signals: usize,
    pub sell_signals: usize,
    pub total_risk_amount: f64,
    pub total_position_value: f64,
}

impl Summary {
    /// Computes statistics over a generated signal set.
    pub fn from_signals(total_analyzed: usize, signals: &[Signal]) -> Self {
        let count = signals.len();
        let (avg_confidence, avg_risk_reward) = if count > 0 {
            (
                signals.iter().map(|s| s.confidence).sum::<f64>() / count as f64,
                signals.iter().map(|s| s.risk_reward_ratio).sum::<f64>() / count as f64,
            )
        } else {
            (0.0, 0.0)
        };

        Self {
            total_analyzed,
            signals_generated: count,
            avg_confidence,
            avg_risk_reward,
            buy_signals: signals.iter().filter(|s| s.direction.is_buy()).count(),
            sell_signals: signals.iter().filter(|s| !s.direction.is_buy()).count(),
            total_risk_amount: signals
                .iter()
                .map(|s| s.position_sizing.risk_amount)
                .sum(),
            total_position_value: signals
                .iter()
                .map(|s| s.position_sizing.position_value)
                .sum(),
        }
    }
}
