//! FeatureSnapshot — the per-symbol market data unit.

use serde::{Deserialize, Serialize};

/// Normalized per-symbol record of current market state, produced by the
/// data collaborator once per analysis run.
///
/// Strategies read only this struct plus the trading config. Missing or
/// unusable fields are represented explicitly (`None` / non-positive) and
/// the derived accessors return `None` instead of dividing by zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureSnapshot {
    pub symbol: String,
    pub current_price: f64,
    pub previous_close: f64,
    /// Last premarket print, if the session had one.
    pub premarket_price: Option<f64>,
    pub volume: f64,
    /// Average historical daily volume.
    pub average_volume: f64,
}

impl FeatureSnapshot {
    /// Percent gap between current price and previous close.
    ///
    /// `None` when the previous close is missing or non-positive.
    pub fn gap_percent(&self) -> Option<f64> {
        if self.previous_close <= 0.0 {
            return None;
        }
        Some((self.current_price - self.previous_close) / self.previous_close * 100.0)
    }

    /// Current volume divided by average volume.
    ///
    /// `None` when no usable average volume is available; callers must skip
    /// volume-gated logic rather than treat the ratio as zero or infinite.
    pub fn volume_ratio(&self) -> Option<f64> {
        if self.average_volume <= 0.0 || self.volume < 0.0 {
            return None;
        }
        Some(self.volume / self.average_volume)
    }

    /// Percent move from previous close to the premarket price.
    ///
    /// `None` when either price is missing or non-positive.
    pub fn premarket_move_percent(&self) -> Option<f64> {
        let premarket = self.premarket_price.filter(|p| *p > 0.0)?;
        if self.previous_close <= 0.0 {
            return None;
        }
        Some((premarket - self.previous_close) / self.previous_close * 100.0)
    }
}
