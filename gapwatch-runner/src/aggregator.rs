//! Signal aggregator — fans every snapshot out over every strategy.
//!
//! Each (snapshot, strategy) pair is independent and side-effect-free, so
//! evaluation runs across the rayon pool with a single join point: collecting
//! the accepted signals before ranking. The final ranking is a deterministic
//! total order, stable across repeated runs on identical input.

use rayon::prelude::*;
use std::time::Instant;

use chrono::Utc;
use gapwatch_core::{risk, ConfigError, FeatureSnapshot, Signal, Strategy, TradingConfig};

use crate::result::{AnalysisResult, Summary};

/// Runs all strategies over all snapshots and ranks the accepted signals.
///
/// Fails fast on invalid configuration, before any per-symbol work. An empty
/// snapshot slice produces an empty result, not an error.
pub fn aggregate(
    snapshots: &[FeatureSnapshot],
    config: &TradingConfig,
) -> Result<AnalysisResult, ConfigError> {
    config.validate()?;
    let start = Instant::now();

    let mut signals: Vec<Signal> = snapshots
        .par_iter()
        .flat_map_iter(|snapshot| {
            Strategy::ALL.iter().filter_map(move |strategy| {
                let candidate = strategy.evaluate(snapshot, config)?;
                risk::price_and_filter(&candidate, config)
            })
        })
        .collect();

    rank(&mut signals);

    log::info!(
        "analyzed {} snapshots, generated {} signals",
        snapshots.len(),
        signals.len()
    );

    let summary = Summary::from_signals(snapshots.len(), &signals);
    Ok(AnalysisResult {
        signals,
        summary,
        timestamp: Utc::now(),
        duration_secs: start.elapsed().as_secs_f64(),
    })
}

/// Descending confidence, ties by descending risk/reward, then ascending
/// symbol. `total_cmp` keeps the order total even for pathological floats.
fn rank(signals: &mut [Signal]) {
    signals.sort_by(|a, b| {
        b.confidence
            .total_cmp(&a.confidence)
            .then(b.risk_reward_ratio.total_cmp(&a.risk_reward_ratio))
            .then_with(|| a.symbol.cmp(&b.symbol))
    });
}
