//! # Domain
//!
//! Pure profiling logic: options, tokenization, per-row metrics and the
//! single-pass [`Profiler`](analytics::Profiler) accumulator.
//!
//! Nothing here performs I/O; text units arrive as `&str`.

#![allow(clippy::multiple_crate_versions)]

pub mod analytics;
pub mod model;
pub mod options;
pub mod text;

pub use analytics::{ProfileSummary, Profiler, profile_texts};
pub use model::{Bigram, CorpusProfile, MetricColumn, MetricValue, MetricsTable, RowMetrics};
pub use options::ProfileOptions;
