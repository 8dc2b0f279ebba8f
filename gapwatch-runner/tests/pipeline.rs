//! End-to-end pipeline tests: snapshots through strategies, risk manager,
//! and aggregator, checked against hand-computed expectations.

use gapwatch_core::{FeatureSnapshot, SignalDirection, TradingConfig};
use gapwatch_runner::{aggregate, render_report};

fn snapshot(
    symbol: &str,
    current: f64,
    prev_close: f64,
    premarket: Option<f64>,
    volume: f64,
    avg_volume: f64,
) -> FeatureSnapshot {
    FeatureSnapshot {
        symbol: symbol.into(),
        current_price: current,
        previous_close: prev_close,
        premarket_price: premarket,
        volume,
        average_volume: avg_volume,
    }
}

#[test]
fn gap_up_with_volume_produces_exact_risk_reward() {
    // 5.2% gap over the 3% threshold, 3.2x volume over the 2x multiplier.
    let snaps = vec![snapshot("AAPL", 105.2, 100.0, None, 3_200_000.0, 1_000_000.0)];
    let config = TradingConfig {
        account_size: 1_000_000.0,
        ..TradingConfig::default()
    };
    assert_eq!(config.risk_budget(), 20_000.0);

    let result = aggregate(&snaps, &config).unwrap();
    let gap_signal = result
        .signals
        .iter()
        .find(|s| s.strategy_name == "Gap Momentum")
        .expect("gap momentum should fire");

    assert_eq!(gap_signal.direction, SignalDirection::Buy);
    assert!((gap_signal.risk_reward_ratio - 2.0).abs() < 1e-9);
    assert!(gap_signal.prices_are_ordered());
    assert!(gap_signal.position_sizing.risk_amount <= config.risk_budget() + 1e-9);
    assert!(gap_signal.position_sizing.position_percent <= config.max_position_size + 1e-9);
}

#[test]
fn gap_without_volume_confirmation_does_not_fire() {
    // 5% gap but only 1.5x volume: gap momentum must stay silent, and the
    // 1.5x ratio is also below volume breakout's 3x floor.
    let snaps = vec![snapshot("GME", 105.0, 100.0, None, 1_500_000.0, 1_000_000.0)];
    let result = aggregate(&snaps, &TradingConfig::default()).unwrap();
    assert_eq!(result.summary.signals_generated, 0);
}

#[test]
fn insufficient_capital_drops_the_candidate() {
    // account 10k at 2% risk = 200 budget; a 3% stop on an 8400-dollar
    // entry is a 252-dollar stop distance, so zero shares resolve.
    let snaps = vec![snapshot(
        "BRK.A",
        8_400.0,
        8_000.0,
        None,
        3_000_000.0,
        1_000_000.0,
    )];
    let config = TradingConfig {
        account_size: 10_000.0,
        max_position_size: 1.0,
        ..TradingConfig::default()
    };

    let result = aggregate(&snaps, &config).unwrap();
    assert_eq!(result.summary.total_analyzed, 1);
    assert_eq!(result.summary.signals_generated, 0);
}

#[test]
fn empty_snapshot_sequence_is_a_valid_run() {
    let result = aggregate(&[], &TradingConfig::default()).unwrap();
    assert_eq!(result.summary.total_analyzed, 0);
    assert_eq!(result.summary.signals_generated, 0);
    assert_eq!(result.summary.avg_confidence, 0.0);
    assert_eq!(result.summary.avg_risk_reward, 0.0);

    // The report renders without panicking on the empty set.
    let report = render_report(&result);
    assert!(report.contains("No trading signals generated."));
}

#[test]
fn premarket_snapshot_flows_through_the_pipeline() {
    // 4% premarket move on 2.5x volume; current price barely moved, so gap
    // momentum and volume breakout stay out of the way.
    let snaps = vec![snapshot(
        "META",
        100.5,
        100.0,
        Some(104.0),
        2_500_000.0,
        1_000_000.0,
    )];
    let result = aggregate(&snaps, &TradingConfig::default()).unwrap();

    assert_eq!(result.summary.signals_generated, 1);
    let signal = &result.signals[0];
    assert_eq!(signal.strategy_name, "Premarket Momentum");
    assert_eq!(signal.direction, SignalDirection::Buy);
    // Entry is always the current price, not the premarket print.
    assert_eq!(signal.entry_price, 100.5);
}

#[test]
fn mixed_batch_ranks_deterministically() {
    let snaps = vec![
        snapshot("AAPL", 105.2, 100.0, None, 3_200_000.0, 1_000_000.0),
        snapshot("TSLA", 93.0, 100.0, None, 4_500_000.0, 1_000_000.0),
        snapshot("META", 100.5, 100.0, Some(96.0), 2_500_000.0, 1_000_000.0),
        snapshot("KO", 100.2, 100.0, None, 900_000.0, 1_000_000.0),
        // Broken snapshot: no average volume. Skipped, never a panic.
        snapshot("IPO1", 25.0, 20.0, None, 5_000_000.0, 0.0),
    ];
    let config = TradingConfig::default();

    let first = aggregate(&snaps, &config).unwrap();
    let second = aggregate(&snaps, &config).unwrap();

    assert_eq!(first.summary.total_analyzed, 5);
    assert!(first.summary.signals_generated >= 3);
    assert_eq!(first.summary, second.summary);

    let order: Vec<_> = first
        .signals
        .iter()
        .map(|s| (s.symbol.clone(), s.strategy_name.clone()))
        .collect();
    let order_again: Vec<_> = second
        .signals
        .iter()
        .map(|s| (s.symbol.clone(), s.strategy_name.clone()))
        .collect();
    assert_eq!(order, order_again);

    // Every generated signal holds the numeric invariants.
    for signal in &first.signals {
        assert!(signal.prices_are_ordered());
        assert!(signal.risk_reward_ratio >= config.min_risk_reward_ratio - 1e-9);
        assert!(signal.position_sizing.position_percent <= config.max_position_size + 1e-9);
        assert!(signal.position_sizing.shares > 0);
        assert!((0.0..=1.0).contains(&signal.confidence));
    }

    // Sell pressure shows up with the right direction.
    let tsla = first
        .signals
        .iter()
        .find(|s| s.symbol == "TSLA")
        .expect("TSLA gap down should fire");
    assert_eq!(tsla.direction, SignalDirection::Sell);
}
