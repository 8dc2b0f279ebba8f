//! Premarket momentum — trades significant premarket moves with volume backing.
//!
//! Requires a premarket print; the move is measured from previous close to
//! the premarket price. Volume must clear the configured multiplier — a
//! snapshot with no usable volume data never qualifies.

use crate::config::TradingConfig;
use crate::domain::{FeatureSnapshot, SignalDirection};

use super::{saturating_confidence, CandidateMetrics, RawCandidate, Strategy};

/// Minimum |premarket move| (percent) worth acting on.
const MIN_PREMARKET_MOVE_PERCENT: f64 = 2.0;

pub(super) fn evaluate(
    snapshot: &FeatureSnapshot,
    config: &TradingConfig,
) -> Option<RawCandidate> {
    let premarket_move = snapshot.premarket_move_percent()?;
    let volume_ratio = snapshot.volume_ratio()?;

    if premarket_move.abs() < MIN_PREMARKET_MOVE_PERCENT {
        return None;
    }
    if volume_ratio < config.volume_threshold_multiplier {
        return None;
    }

    let direction = if premarket_move > 0.0 {
        SignalDirection::Buy
    } else {
        SignalDirection::Sell
    };

    Some(RawCandidate {
        symbol: snapshot.symbol.clone(),
        strategy: Strategy::PremarketMomentum,
        direction,
        raw_confidence: confidence(premarket_move.abs(), volume_ratio),
        current_price: snapshot.current_price,
        metrics: CandidateMetrics {
            gap_percent: None,
            volume_ratio: Some(volume_ratio),
            premarket_move_percent: Some(premarket_move),
        },
        reasoning: format!(
            "Premarket momentum {premarket_move:+.1}% with {volume_ratio:.1}x average volume"
        ),
    })
}

/// Strictly increasing in both |move| and volume ratio, bounded to [0, 1).
fn confidence(move_abs: f64, volume_ratio: f64) -> f64 {
    saturating_confidence(move_abs / 8.0 * 0.6 + volume_ratio / 4.0)
}
