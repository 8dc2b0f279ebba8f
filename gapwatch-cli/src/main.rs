//! GapWatch CLI — scan a snapshot file and print ranked trading signals.
//!
//! The CLI plays the out-of-process collaborators' roles: it loads feature
//! snapshots from a local CSV or JSON file (the data side) and renders the
//! analysis result as a text report and optional JSON document (the
//! reporting side). The decision logic all lives in gapwatch-core/runner.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

use gapwatch_core::{FeatureSnapshot, TradingConfig};
use gapwatch_runner::{aggregate, render_report};

#[derive(Parser)]
#[command(name = "gapwatch", about = "GapWatch — premarket signal scanner")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a snapshot file against all strategies and rank the signals.
    Scan {
        /// Snapshot file: .csv (headered) or .json (array of snapshots).
        #[arg(long)]
        snapshots: PathBuf,

        /// TOML trading config. Defaults apply for missing keys.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Write the full analysis result as JSON to this path.
        #[arg(long)]
        output: Option<PathBuf>,

        /// Keep only the top N ranked signals.
        #[arg(long)]
        top: Option<usize>,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Scan {
            snapshots,
            config,
            output,
            top,
        } => scan(&snapshots, config.as_deref(), output.as_deref(), top),
    }
}

fn scan(
    snapshots_path: &Path,
    config_path: Option<&Path>,
    output_path: Option<&Path>,
    top: Option<usize>,
) -> Result<()> {
    let config = load_config(config_path)?;
    // Refuse invalid configuration before touching any snapshot.
    config.validate().context("invalid trading config")?;

    let snapshots = load_snapshots(snapshots_path)?;

    let mut result = aggregate(&snapshots, &config)?;
    if let Some(n) = top {
        result = result.top(n);
    }

    print!("{}", render_report(&result));

    if let Some(path) = output_path {
        let json = serde_json::to_string_pretty(&result)?;
        fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<TradingConfig> {
    match path {
        None => Ok(TradingConfig::default()),
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            toml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
        }
    }
}

fn load_snapshots(path: &Path) -> Result<Vec<FeatureSnapshot>> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => {
            let mut reader = csv::Reader::from_path(path)
                .with_context(|| format!("opening {}", path.display()))?;
            let mut snapshots = Vec::new();
            for record in reader.deserialize() {
                let snapshot: FeatureSnapshot =
                    record.with_context(|| format!("parsing {}", path.display()))?;
                snapshots.push(snapshot);
            }
            Ok(snapshots)
        }
        Some("json") => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
        }
        _ => bail!(
            "unsupported snapshot format: {} (expected .csv or .json)",
            path.display()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("gapwatch-test-{name}"));
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn csv_snapshots_parse_with_optional_premarket() {
        let path = temp_file(
            "snaps.csv",
            "symbol,current_price,previous_close,premarket_price,volume,average_volume\n\
             AAPL,105.2,100.0,104.0,3200000,1000000\n\
             KO,100.1,100.0,,900000,1000000\n",
        );
        let snaps = load_snapshots(&path).unwrap();
        assert_eq!(snaps.len(), 2);
        assert_eq!(snaps[0].premarket_price, Some(104.0));
        assert_eq!(snaps[1].premarket_price, None);
        fs::remove_file(path).ok();
    }

    #[test]
    fn json_snapshots_parse() {
        let path = temp_file(
            "snaps.json",
            r#"[{"symbol":"AAPL","current_price":105.2,"previous_close":100.0,
                 "premarket_price":null,"volume":3200000.0,"average_volume":1000000.0}]"#,
        );
        let snaps = load_snapshots(&path).unwrap();
        assert_eq!(snaps.len(), 1);
        assert_eq!(snaps[0].symbol, "AAPL");
        fs::remove_file(path).ok();
    }

    #[test]
    fn unknown_extension_is_an_error() {
        assert!(load_snapshots(Path::new("snapshots.parquet")).is_err());
    }

    #[test]
    fn config_toml_overrides_defaults() {
        let path = temp_file("config.toml", "account_size = 250000.0\n");
        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.account_size, 250_000.0);
        assert_eq!(config.min_risk_reward_ratio, 2.0);
        fs::remove_file(path).ok();
    }
}
