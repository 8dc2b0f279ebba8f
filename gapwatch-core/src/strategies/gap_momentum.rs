//! Gap momentum — trades opening gaps confirmed by volume.
//!
//! Fires when the gap versus previous close reaches the configured threshold
//! AND current volume runs at least the configured multiple of average
//! volume. Direction follows the sign of the gap.

use crate::config::TradingConfig;
use crate::domain::{FeatureSnapshot, SignalDirection};

use super::{saturating_confidence, CandidateMetrics, RawCandidate, Strategy};

pub(super) fn evaluate(
    snapshot: &FeatureSnapshot,
    config: &TradingConfig,
) -> Option<RawCandidate> {
    let gap = snapshot.gap_percent()?;
    let volume_ratio = snapshot.volume_ratio()?;

    if gap.abs() < config.gap_threshold_percent {
        return None;
    }
    if volume_ratio < config.volume_threshold_multiplier {
        return None;
    }

    let direction = if gap > 0.0 {
        SignalDirection::Buy
    } else {
        SignalDirection::Sell
    };

    Some(RawCandidate {
        symbol: snapshot.symbol.clone(),
        strategy: Strategy::GapMomentum,
        direction,
        raw_confidence: confidence(gap.abs(), volume_ratio),
        current_price: snapshot.current_price,
        metrics: CandidateMetrics {
            gap_percent: Some(gap),
            volume_ratio: Some(volume_ratio),
            premarket_move_percent: None,
        },
        reasoning: format!("Gap {gap:+.1}% with {volume_ratio:.1}x average volume"),
    })
}

/// Strictly increasing in both |gap| and volume ratio, bounded to [0, 1).
///
/// A 10% gap on 3x volume scores 1.5 → confidence 0.6; the curve saturates
/// toward 1.0 as either feature grows.
fn confidence(gap_abs: f64, volume_ratio: f64) -> f64 {
    saturating_confidence(gap_abs / 10.0 * 0.5 + volume_ratio / 3.0)
}
