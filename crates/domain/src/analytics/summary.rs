use serde::Serialize;

use crate::model::{CorpusProfile, MetricColumn, MetricValue, MetricsTable};

/// Corpus-level figures derived from a finished profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileSummary {
    pub units: usize,
    pub empty_units: usize,
    pub chars: usize,
    pub tokens: usize,
    pub distinct_chars: usize,
    pub distinct_tokens: usize,
    pub distinct_bigrams: usize,
    pub mean_text_length: f64,
    /// `None` when the column was not computed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mean_html_tags: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mean_special_char_fraction: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mean_whitespace_fraction: Option<f64>,
}

impl ProfileSummary {
    pub fn from_profile(profile: &CorpusProfile) -> Self {
        let metrics = &profile.metrics;
        let units = metrics.len();
        let chars = metrics.total_chars().value();
        Self {
            units,
            empty_units: metrics.iter().filter(|r| r.is_empty).count(),
            chars,
            tokens: metrics.total_tokens().value(),
            distinct_chars: profile.chars.len(),
            distinct_tokens: profile.tokens.len(),
            distinct_bigrams: profile.bigrams.len(),
            mean_text_length: mean(chars as f64, units),
            mean_html_tags: column_mean(metrics, MetricColumn::HtmlTags),
            mean_special_char_fraction: column_mean(metrics, MetricColumn::SpecialCharFraction),
            mean_whitespace_fraction: column_mean(metrics, MetricColumn::WhitespaceFraction),
        }
    }
}

fn mean(sum: f64, n: usize) -> f64 {
    if n == 0 { 0.0 } else { sum / n as f64 }
}

fn column_mean(metrics: &MetricsTable, column: MetricColumn) -> Option<f64> {
    if !metrics.columns().contains(&column) {
        return None;
    }
    let (sum, n) = metrics
        .column(column)
        .into_iter()
        .flatten()
        .fold((0.0, 0usize), |(sum, n), value| match value {
            MetricValue::Count(c) => (sum + c as f64, n + 1),
            MetricValue::Fraction(x) => (sum + x, n + 1),
            MetricValue::Flag(flag) => (sum + f64::from(u8::from(flag)), n + 1),
        });
    Some(mean(sum, n))
}

#[cfg(test)]
mod tests {
    use crate::{ProfileOptions, profile_texts};

    #[test]
    fn summarises_counts_and_means() {
        let profile =
            profile_texts(["ab cd", "", "<p>x</p>"], &ProfileOptions::default()).expect("profiling succeeds");
        let summary = profile.summary();
        assert_eq!(summary.units, 3);
        assert_eq!(summary.empty_units, 1);
        assert_eq!(summary.chars, 13);
        assert_eq!(summary.tokens, 5);
        assert_eq!(summary.distinct_bigrams, 3);
        assert!((summary.mean_text_length - 13.0 / 3.0).abs() < 1e-12);
        assert_eq!(summary.mean_html_tags, Some(1.0 / 3.0));
    }

    #[test]
    fn disabled_columns_have_no_mean() {
        let profile = profile_texts(["a"], &ProfileOptions::base_only()).expect("profiling succeeds");
        let summary = profile.summary();
        assert!(summary.mean_html_tags.is_none());
        assert!(summary.mean_whitespace_fraction.is_none());
    }

    #[test]
    fn empty_corpus_summary_is_zeroed() {
        let profile = profile_texts(Vec::<String>::new(), &ProfileOptions::default()).expect("profiling succeeds");
        let summary = profile.summary();
        assert_eq!(summary.units, 0);
        assert_eq!(summary.mean_text_length, 0.0);
        assert_eq!(summary.mean_whitespace_fraction, Some(0.0));
    }
}
