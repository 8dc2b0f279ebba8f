//! Plain-text report rendering for an analysis result.
//!
//! Read-only consumer of `AnalysisResult`; machine-readable output is just
//! `serde_json` on the result itself.

use std::fmt::Write;

use crate::result::AnalysisResult;

const RULE: &str = "================================================================================";

/// Renders the ranked signals and summary as a human-readable report.
pub fn render_report(result: &AnalysisResult) -> String {
    let mut out = String::new();
    let summary = &result.summary;

    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "                        PREMARKET TRADING SIGNALS REPORT");
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "Generated: {}", result.timestamp.to_rfc3339());
    let _ = writeln!(out, "Analysis Duration: {:.2}s", result.duration_secs);
    let _ = writeln!(out);

    let _ = writeln!(out, "SUMMARY:");
    let _ = writeln!(out, "  Snapshots Analyzed:  {}", summary.total_analyzed);
    let _ = writeln!(out, "  Signals Generated:   {}", summary.signals_generated);
    if summary.signals_generated > 0 {
        let _ = writeln!(
            out,
            "  Average Confidence:  {:.1}%",
            summary.avg_confidence * 100.0
        );
        let _ = writeln!(out, "  Average Risk:Reward: {:.1}:1", summary.avg_risk_reward);
        let _ = writeln!(out, "  Buy Signals:         {}", summary.buy_signals);
        let _ = writeln!(out, "  Sell Signals:        {}", summary.sell_signals);
        let _ = writeln!(
            out,
            "  Total Risk Amount:   ${:.2}",
            summary.total_risk_amount
        );
        let _ = writeln!(
            out,
            "  Total Position Value: ${:.2}",
            summary.total_position_value
        );
    }
    let _ = writeln!(out);

    if result.signals.is_empty() {
        let _ = writeln!(out, "No trading signals generated.");
    } else {
        let _ = writeln!(out, "TOP TRADING SIGNALS:");
        let _ = writeln!(out, "{}", "-".repeat(80));
        for (rank, signal) in result.signals.iter().enumerate() {
            let sizing = &signal.position_sizing;
            let _ = writeln!(out);
            let _ = writeln!(
                out,
                "{}. {} - {}",
                rank + 1,
                signal.symbol,
                signal.strategy_name
            );
            let _ = writeln!(
                out,
                "   Signal: {} | Confidence: {:.1}%",
                signal.direction.as_str(),
                signal.confidence * 100.0
            );
            let _ = writeln!(
                out,
                "   Entry: ${:.2} | Stop: ${:.2} | Target: ${:.2} | R:R {:.1}:1",
                signal.entry_price, signal.stop_loss, signal.take_profit, signal.risk_reward_ratio
            );
            let _ = writeln!(
                out,
                "   Position: {} shares (${:.2}, {:.1}% of account)",
                sizing.shares,
                sizing.position_value,
                sizing.position_percent * 100.0
            );
            let _ = writeln!(
                out,
                "   Risk: ${:.2} | Potential Profit: ${:.2}",
                sizing.risk_amount, sizing.potential_profit
            );
            let _ = writeln!(out, "   Reasoning: {}", signal.reasoning);
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(
        out,
        "DISCLAIMER: For research and education only. Not investment advice."
    );
    let _ = writeln!(out, "{RULE}");

    out
}
