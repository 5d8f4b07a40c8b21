pub mod metrics;
pub mod profile;

pub use metrics::{MetricColumn, MetricValue, MetricsTable, RowMetrics};
pub use profile::{Bigram, CorpusProfile};
