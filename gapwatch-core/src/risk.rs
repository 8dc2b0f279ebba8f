//! Risk manager — prices candidates and sizes positions against the risk budget.
//!
//! Takes a raw candidate and shapes it into a full signal: stop from a
//! per-strategy risk fraction, target placed exactly at the configured
//! minimum reward/risk, shares from the per-trade risk budget, capped by the
//! maximum position size. Candidates that cannot be sized to at least one
//! share are rejected, and that rejection is distinguishable from a strategy
//! non-match in the debug log.

use crate::config::TradingConfig;
use crate::domain::{PositionSizing, Signal, SignalDirection};
use crate::strategies::{RawCandidate, Strategy};

/// Why the risk manager dropped a candidate.
///
/// Rejections never surface as errors to the caller; they exist so
/// diagnostics can tell "strategy did not match" apart from "matched but
/// could not be sized".
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum Rejection {
    #[error("entry price must be positive, got {price}")]
    NonPositiveEntry { price: f64 },

    #[error("risk budget {risk_budget:.2} buys zero shares at stop distance {stop_distance:.2}")]
    InsufficientCapital {
        risk_budget: f64,
        stop_distance: f64,
    },
}

/// Distance from entry to stop, as a fraction of entry price.
///
/// Per-strategy heuristics: momentum entries use a tighter stop than raw
/// volume spikes, which whip around more.
fn stop_fraction(strategy: Strategy) -> f64 {
    match strategy {
        Strategy::GapMomentum => 0.03,
        Strategy::VolumeBreakout => 0.04,
        Strategy::PremarketMomentum => 0.03,
    }
}

/// Prices a candidate, or reports why it cannot become a signal.
pub fn price_candidate(
    candidate: &RawCandidate,
    config: &TradingConfig,
) -> Result<Signal, Rejection> {
    let entry_price = candidate.current_price;
    if entry_price <= 0.0 {
        return Err(Rejection::NonPositiveEntry { price: entry_price });
    }

    let fraction = stop_fraction(candidate.strategy);
    let stop_distance = entry_price * fraction;
    let reward_distance = stop_distance * config.min_risk_reward_ratio;

    let (stop_loss, take_profit) = match candidate.direction {
        SignalDirection::Buy => (entry_price - stop_distance, entry_price + reward_distance),
        SignalDirection::Sell => (entry_price + stop_distance, entry_price - reward_distance),
    };

    // Risk-budget sizing first, then the position-size cap dominates.
    let risk_budget = config.risk_budget();
    let mut shares = (risk_budget / stop_distance).floor() as u64;

    let max_position_value = config.account_size * config.max_position_size;
    if shares as f64 * entry_price > max_position_value {
        shares = (max_position_value / entry_price).floor() as u64;
    }

    if shares == 0 {
        return Err(Rejection::InsufficientCapital {
            risk_budget,
            stop_distance,
        });
    }

    let position_value = shares as f64 * entry_price;
    let position_sizing = PositionSizing {
        shares,
        position_value,
        position_percent: position_value / config.account_size,
        risk_amount: shares as f64 * stop_distance,
        potential_profit: shares as f64 * reward_distance,
        potential_loss: shares as f64 * stop_distance,
    };

    Ok(Signal {
        symbol: candidate.symbol.clone(),
        strategy_name: candidate.strategy.name().to_string(),
        direction: candidate.direction,
        confidence: candidate.raw_confidence,
        current_price: candidate.current_price,
        entry_price,
        stop_loss,
        take_profit,
        risk_reward_ratio: reward_distance / stop_distance,
        reasoning: candidate.reasoning.clone(),
        position_sizing,
    })
}

/// Prices a candidate, logging and swallowing rejections.
///
/// Absence of a signal is "no value produced", never an error.
pub fn price_and_filter(candidate: &RawCandidate, config: &TradingConfig) -> Option<Signal> {
    match price_candidate(candidate, config) {
        Ok(signal) => Some(signal),
        Err(rejection) => {
            log::debug!(
                "{} {}: candidate rejected: {rejection}",
                candidate.strategy.name(),
                candidate.symbol
            );
            None
        }
    }
}
