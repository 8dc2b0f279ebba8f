//! Volume breakout — trades unusual volume spikes with directional price action.
//!
//! Uses a strategy-specific 3x volume floor (independent of the configured
//! gap threshold) and requires at least a 1% price change versus previous
//! close to establish direction.

use crate::config::TradingConfig;
use crate::domain::{FeatureSnapshot, SignalDirection};

use super::{saturating_confidence, CandidateMetrics, RawCandidate, Strategy};

/// Volume must run at least this multiple of average volume.
const VOLUME_SPIKE_RATIO: f64 = 3.0;

/// Minimum |price change| (percent) to call a direction.
const MIN_PRICE_CHANGE_PERCENT: f64 = 1.0;

pub(super) fn evaluate(
    snapshot: &FeatureSnapshot,
    _config: &TradingConfig,
) -> Option<RawCandidate> {
    let volume_ratio = snapshot.volume_ratio()?;
    let price_change = snapshot.gap_percent()?;

    if volume_ratio < VOLUME_SPIKE_RATIO {
        return None;
    }
    if price_change.abs() <= MIN_PRICE_CHANGE_PERCENT {
        return None;
    }

    let direction = if price_change > 0.0 {
        SignalDirection::Buy
    } else {
        SignalDirection::Sell
    };

    Some(RawCandidate {
        symbol: snapshot.symbol.clone(),
        strategy: Strategy::VolumeBreakout,
        direction,
        raw_confidence: confidence(volume_ratio),
        current_price: snapshot.current_price,
        metrics: CandidateMetrics {
            gap_percent: Some(price_change),
            volume_ratio: Some(volume_ratio),
            premarket_move_percent: None,
        },
        reasoning: format!(
            "Volume breakout {volume_ratio:.1}x with {price_change:+.1}% move"
        ),
    })
}

/// Strictly increasing in volume ratio, bounded to [0, 1).
///
/// The 3x qualification floor scores 0.375; a 10x spike scores ~0.56.
fn confidence(volume_ratio: f64) -> f64 {
    saturating_confidence(volume_ratio / 5.0)
}
