//! GapWatch Runner — parallel strategy evaluation, ranking, and reporting.
//!
//! Drives the core over a batch of snapshots: every (snapshot, strategy)
//! pair is evaluated on the rayon pool, accepted signals are ranked into a
//! deterministic total order, and the run is summarized into an
//! [`AnalysisResult`] for the reporting surface.
//!
//! [`AnalysisResult`]: result::AnalysisResult

pub mod aggregator;
pub mod report;
pub mod result;

pub use aggregator::aggregate;
pub use report::render_report;
pub use result::{AnalysisResult, Summary};
