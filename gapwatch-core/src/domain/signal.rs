//! Priced trading signals and their position sizing.

use serde::{Deserialize, Serialize};

/// Direction of a trading signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SignalDirection {
    Buy,
    Sell,
}

impl SignalDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignalDirection::Buy => "BUY",
            SignalDirection::Sell => "SELL",
        }
    }

    pub fn is_buy(&self) -> bool {
        matches!(self, SignalDirection::Buy)
    }
}

/// Share count and dollar exposure derived from the risk budget.
///
/// `position_percent` is a fraction of account size (0.10 = 10%), not a
/// percentage; it never exceeds `TradingConfig::max_position_size`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionSizing {
    pub shares: u64,
    pub position_value: f64,
    pub position_percent: f64,
    /// Dollars actually at risk: `shares * |entry - stop|`.
    pub risk_amount: f64,
    pub potential_profit: f64,
    pub potential_loss: f64,
}

/// A fully priced, risk-managed trading signal.
///
/// Produced by the risk manager from an accepted candidate; immutable
/// thereafter. Invariant: for BUY, `stop_loss < entry_price < take_profit`;
/// for SELL, `take_profit < entry_price < stop_loss`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Signal {
    pub symbol: String,
    pub strategy_name: String,
    pub direction: SignalDirection,
    /// Confidence in [0, 1], carried unmodified from the strategy.
    pub confidence: f64,
    pub current_price: f64,
    pub entry_price: f64,
    pub stop_loss: f64,
    pub take_profit: f64,
    pub risk_reward_ratio: f64,
    pub reasoning: String,
    pub position_sizing: PositionSizing,
}

impl Signal {
    /// Checks the stop/entry/target ordering invariant for this direction.
    pub fn prices_are_ordered(&self) -> bool {
        match self.direction {
            SignalDirection::Buy => {
                self.stop_loss < self.entry_price && self.entry_price < self.take_profit
            }
            SignalDirection::Sell => {
                self.take_profit < self.entry_price && self.entry_price < self.stop_loss
            }
        }
    }
}
