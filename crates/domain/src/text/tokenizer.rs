// crates/domain/src/text/tokenizer.rs
use regex::Regex;

use corpus_profile_shared_kernel::DomainResult;

use super::patterns::compile;

/// Word-boundary delimited runs of word characters (letters, digits, `_`).
pub const TOKEN_PATTERN: &str = r"\b\w+\b";

/// Regex tokenizer. No language awareness: a token is a maximal `\w+` run.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    word: Regex,
}

impl Tokenizer {
    pub fn new() -> DomainResult<Self> {
        Ok(Self { word: compile(TOKEN_PATTERN)? })
    }

    /// Tokens in left-to-right, non-overlapping order, borrowed from `text`.
    pub fn tokenize<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.word.find_iter(text).map(|m| m.as_str()).collect()
    }
}

/// Adjacent token pairs `(tokens[i], tokens[i + 1])`. Fewer than two tokens yield nothing.
pub fn bigrams<'a, 't>(tokens: &'a [&'t str]) -> impl Iterator<Item = (&'t str, &'t str)> + 'a {
    tokens.windows(2).map(|pair| (pair[0], pair[1]))
}
