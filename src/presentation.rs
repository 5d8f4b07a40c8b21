//! Rendering of profiles for the terminal.
//!
//! Consumes core output without altering it.

pub mod charts;
pub mod metrics;
pub mod summary;

pub use charts::write_charts;
pub use metrics::write_metrics;
pub use summary::{write_json, write_preview, write_summary};
