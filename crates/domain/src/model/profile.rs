// crates/domain/src/model/profile.rs
use serde::Serialize;

use corpus_profile_shared_kernel::FrequencyTable;

use super::MetricsTable;
use crate::analytics::ProfileSummary;

/// Ordered pair of adjacent tokens from one text unit.
pub type Bigram = (String, String);

/// Result of one profiling pass. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorpusProfile {
    pub chars: FrequencyTable<char>,
    pub tokens: FrequencyTable<String>,
    pub bigrams: FrequencyTable<Bigram>,
    pub metrics: MetricsTable,
}

impl CorpusProfile {
    /// `(char_freq, token_freq, bigram_freq, metrics_table)`.
    pub fn into_parts(
        self,
    ) -> (FrequencyTable<char>, FrequencyTable<String>, FrequencyTable<Bigram>, MetricsTable) {
        (self.chars, self.tokens, self.bigrams, self.metrics)
    }

    /// Count for the bigram `(first, second)`.
    pub fn bigram_count(&self, first: &str, second: &str) -> usize {
        self.bigrams.get(&(first.to_string(), second.to_string()))
    }

    pub fn units(&self) -> usize {
        self.metrics.len()
    }

    pub fn summary(&self) -> ProfileSummary {
        ProfileSummary::from_profile(self)
    }
}
