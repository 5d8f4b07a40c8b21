//! Corpus profiling: character, token and bigram frequencies plus per-row
//! surface metrics over any [`CorpusSource`].
//!
//! ```no_run
//! use corpus_profile::{InMemorySource, ProfileOptions, profile};
//!
//! let source = InMemorySource::from_texts(["Hello world!", "  ", "<p>hi</p>"]);
//! let (chars, tokens, bigrams, metrics) = profile(&source, &ProfileOptions::default())?.into_parts();
//! # Ok::<(), corpus_profile::CorpusProfileError>(())
//! ```

// 依存関係の推移的依存により複数のバージョンが混在するための抑制
#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod args;
pub mod config;
pub mod options;
pub mod presentation;

pub use corpus_profile_domain::{
    Bigram, CorpusProfile, MetricColumn, MetricValue, MetricsTable, ProfileOptions, ProfileSummary, RowMetrics,
};
pub use corpus_profile_infra::{InMemorySource, JsonlSource, LineSource, LogObserver, LogProgress, TsvSource};
pub use corpus_profile_ports::{CorpusSource, DEFAULT_PREVIEW, NoopObserver, RawUnit, SourceObserver};
pub use corpus_profile_shared_kernel::{CorpusProfileError, FrequencyTable, Result};

use corpus_profile_usecase::{PreviewCorpus, ProfileCorpus};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Profiles `source` in a single pass.
///
/// # Errors
///
/// Fails if the source cannot be opened or iterated, or if it yields a
/// non-text unit. No partial result is returned.
pub fn profile(source: &dyn CorpusSource, options: &ProfileOptions) -> Result<CorpusProfile> {
    ProfileCorpus::new(source).run(options)
}

/// First `n` units of `source` (fewer if it is shorter), from a fresh pass.
///
/// # Errors
///
/// Fails if the source cannot be opened or iterated.
pub fn head(source: &dyn CorpusSource, n: usize) -> Result<Vec<RawUnit>> {
    PreviewCorpus::new(source).run(n)
}
