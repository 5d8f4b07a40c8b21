// crates/domain/src/analytics/profiler.rs
use std::borrow::Cow;

use corpus_profile_shared_kernel::{CharCount, DomainResult, FrequencyTable, TokenCount};

use crate::{
    model::{Bigram, CorpusProfile, MetricsTable, RowMetrics},
    options::ProfileOptions,
    text::{TextPatterns, Tokenizer, bigrams, is_blank},
};

/// Single-pass accumulator over text units.
///
/// Owns its four accumulators exclusively; concurrent runs need separate
/// instances. [`finish`](Self::finish) consumes the profiler, so no partial
/// result is ever observable.
#[derive(Debug)]
pub struct Profiler {
    options: ProfileOptions,
    tokenizer: Tokenizer,
    patterns: TextPatterns,
    chars: FrequencyTable<char>,
    tokens: FrequencyTable<String>,
    bigrams: FrequencyTable<Bigram>,
    metrics: MetricsTable,
}

impl Profiler {
    pub fn new(options: ProfileOptions) -> DomainResult<Self> {
        Ok(Self {
            options,
            tokenizer: Tokenizer::new()?,
            patterns: TextPatterns::new()?,
            chars: FrequencyTable::new(),
            tokens: FrequencyTable::new(),
            bigrams: FrequencyTable::new(),
            metrics: MetricsTable::for_options(&options),
        })
    }

    /// Number of units accumulated so far.
    pub fn units(&self) -> usize {
        self.metrics.len()
    }

    /// Accumulates one text unit and appends its metric record.
    pub fn observe(&mut self, raw: &str) {
        let text: Cow<'_, str> = if self.options.to_lower {
            Cow::Owned(raw.to_lowercase())
        } else {
            Cow::Borrowed(raw)
        };
        let tokens = self.tokenizer.tokenize(&text);

        self.chars.extend(text.chars());
        for token in &tokens {
            self.tokens.increment((*token).to_string(), 1);
        }
        for (first, second) in bigrams(&tokens) {
            self.bigrams.increment((first.to_string(), second.to_string()), 1);
        }

        let row = self.measure(&text, tokens.len());
        self.metrics.push(row);
    }

    /// Metric record of the most recently observed unit.
    pub fn last_row(&self) -> Option<&RowMetrics> {
        self.metrics.rows().last()
    }

    pub fn finish(self) -> CorpusProfile {
        CorpusProfile {
            chars: self.chars,
            tokens: self.tokens,
            bigrams: self.bigrams,
            metrics: self.metrics,
        }
    }

    fn measure(&self, text: &str, token_count: usize) -> RowMetrics {
        let length = CharCount::new(text.chars().count());
        let mut row = RowMetrics::new(length, TokenCount::new(token_count), is_blank(text));

        if self.options.check_html_tags {
            row.html_tags = Some(self.patterns.count_tag_pairs(text));
        }
        if self.options.check_special_chars {
            row.special_char_fraction = Some(length.fraction_of(self.patterns.count_special_chars(text)));
        }
        if self.options.check_whitespace {
            row.whitespace_fraction = Some(length.fraction_of(self.patterns.count_whitespace(text)));
        }
        row
    }
}

/// Profiles in-memory texts in one pass.
pub fn profile_texts<I, S>(texts: I, options: &ProfileOptions) -> DomainResult<CorpusProfile>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut profiler = Profiler::new(*options)?;
    for text in texts {
        profiler.observe(text.as_ref());
    }
    Ok(profiler.finish())
}
