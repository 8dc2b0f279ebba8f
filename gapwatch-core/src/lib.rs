//! GapWatch Core — domain types, trading strategies, risk management.
//!
//! This crate contains the decision logic of the scanner:
//! - Domain types (feature snapshots, directions, priced signals)
//! - Trading configuration with fail-fast validation
//! - The closed set of three rule-based strategies
//! - The risk manager (stop/target shaping, risk-budgeted sizing)
//!
//! Everything here is pure and synchronous: strategies and the risk manager
//! read only their inputs and allocate only their outputs, so callers may
//! evaluate snapshot/strategy pairs in parallel with no shared state.

pub mod config;
pub mod domain;
pub mod error;
pub mod risk;
pub mod strategies;

pub use config::TradingConfig;
pub use domain::{FeatureSnapshot, PositionSizing, Signal, SignalDirection};
pub use error::ConfigError;
pub use strategies::{RawCandidate, Strategy};

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: everything the runner fans out across threads
    /// is Send + Sync.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<FeatureSnapshot>();
        require_sync::<FeatureSnapshot>();
        require_send::<TradingConfig>();
        require_sync::<TradingConfig>();
        require_send::<Strategy>();
        require_sync::<Strategy>();
        require_send::<RawCandidate>();
        require_sync::<RawCandidate>();
        require_send::<Signal>();
        require_sync::<Signal>();
        require_send::<ConfigError>();
        require_sync::<ConfigError>();
    }
}
