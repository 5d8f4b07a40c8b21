//! Invariants that hold for every corpus.

use corpus_profile_domain::{MetricColumn, ProfileOptions, profile_texts};
use proptest::prelude::*;

fn corpus() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(r"[ a-zA-Z0-9_<>/!\t\n-]{0,40}", 0..12)
}

fn options() -> impl Strategy<Value = ProfileOptions> {
    (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(lower, html, special, ws)| {
        ProfileOptions::default()
            .with_to_lower(lower)
            .with_html_tags(html)
            .with_special_chars(special)
            .with_whitespace(ws)
    })
}

proptest! {
    #[test]
    fn token_table_total_matches_row_tokens(texts in corpus(), options in options()) {
        let profile = profile_texts(&texts, &options).unwrap();
        prop_assert_eq!(profile.tokens.total(), profile.metrics.total_tokens().value());
    }

    #[test]
    fn bigram_counts_are_bounded_by_their_tokens(texts in corpus()) {
        let profile = profile_texts(&texts, &ProfileOptions::default()).unwrap();
        for ((first, second), count) in profile.bigrams.iter() {
            prop_assert!(*count <= profile.tokens.get(first.as_str()).min(profile.tokens.get(second.as_str())));
        }
    }

    #[test]
    fn empty_flag_matches_trimmed_text(texts in corpus()) {
        let profile = profile_texts(&texts, &ProfileOptions::default()).unwrap();
        for (text, row) in texts.iter().zip(profile.metrics.iter()) {
            prop_assert_eq!(row.is_empty, text.trim().is_empty());
        }
    }

    #[test]
    fn fractions_stay_within_unit_interval(texts in corpus()) {
        let profile = profile_texts(&texts, &ProfileOptions::default()).unwrap();
        for row in profile.metrics.iter() {
            for fraction in [row.special_char_fraction, row.whitespace_fraction].into_iter().flatten() {
                prop_assert!((0.0..=1.0).contains(&fraction));
            }
        }
    }

    #[test]
    fn one_record_per_unit_with_enabled_columns(texts in corpus(), options in options()) {
        let profile = profile_texts(&texts, &options).unwrap();
        prop_assert_eq!(profile.metrics.len(), texts.len());
        let expected = MetricColumn::enabled_by(&options);
        for row in profile.metrics.iter() {
            prop_assert_eq!(row.present_columns(), expected.clone());
        }
    }

    #[test]
    fn character_table_total_matches_text_lengths(texts in corpus()) {
        let profile = profile_texts(&texts, &ProfileOptions::default()).unwrap();
        prop_assert_eq!(profile.chars.total(), profile.metrics.total_chars().value());
    }
}
