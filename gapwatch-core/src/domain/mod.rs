//! Domain types: feature snapshots, signal directions, priced signals.

pub mod signal;
pub mod snapshot;

pub use signal::{PositionSizing, Signal, SignalDirection};
pub use snapshot::FeatureSnapshot;
