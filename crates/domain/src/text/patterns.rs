// crates/domain/src/text/patterns.rs
use regex::Regex;

use corpus_profile_shared_kernel::{DomainError, DomainResult};

/// Opening half of a tag pair: `<` followed by one word character, which is
/// the name the closing tag must repeat.
const TAG_OPEN_PATTERN: &str = r"<(\w)";
/// Non-word, non-space characters except `-`, plus digits and `_`.
pub const SPECIAL_CHAR_PATTERN: &str = r"[^\w\s\x1C-\x1F\-]|[_\d]";
/// Unicode whitespace plus the information separators U+001C..=U+001F.
pub const WHITESPACE_PATTERN: &str = r"[\s\x1C-\x1F]";

/// Whitespace as matched by [`WHITESPACE_PATTERN`].
pub fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// True when `text` is empty once surrounding whitespace is trimmed.
pub fn is_blank(text: &str) -> bool {
    text.chars().all(is_space)
}

pub(crate) fn compile(pattern: &str) -> DomainResult<Regex> {
    Regex::new(pattern).map_err(|e| DomainError::InvalidPattern {
        pattern: pattern.to_string(),
        details: e.to_string(),
        source: Some(Box::new(e)),
    })
}

/// Compiled surface patterns used for the optional row metrics.
#[derive(Debug, Clone)]
pub struct TextPatterns {
    tag_open: Regex,
    special: Regex,
    whitespace: Regex,
}

impl TextPatterns {
    pub fn new() -> DomainResult<Self> {
        Ok(Self {
            tag_open: compile(TAG_OPEN_PATTERN)?,
            special: compile(SPECIAL_CHAR_PATTERN)?,
            whitespace: compile(WHITESPACE_PATTERN)?,
        })
    }

    /// Number of `<x…>…</x>` matches, where `x` is the single word character
    /// after `<` and the closing tag must repeat it exactly (case-sensitive).
    ///
    /// Matches never span a newline. Scanning is left to right and
    /// non-overlapping; each match extends to the last closing tag on the line
    /// that has a `>` before it.
    pub fn count_tag_pairs(&self, text: &str) -> usize {
        text.split('\n').map(|line| self.count_tag_pairs_in_line(line)).sum()
    }

    fn count_tag_pairs_in_line(&self, line: &str) -> usize {
        let mut count = 0;
        let mut pos = 0;
        while let Some(caps) = self.tag_open.captures_at(line, pos) {
            let (Some(open), Some(name)) = (caps.get(0), caps.get(1)) else {
                break;
            };
            match closing_end(line, open.end(), name.as_str()) {
                Some(end) => {
                    count += 1;
                    pos = end;
                }
                // `<` is one byte, so the next char boundary follows directly.
                None => pos = open.start() + 1,
            }
        }
        count
    }

    /// Characters matching [`SPECIAL_CHAR_PATTERN`].
    pub fn count_special_chars(&self, text: &str) -> usize {
        self.special.find_iter(text).count()
    }

    pub fn count_whitespace(&self, text: &str) -> usize {
        self.whitespace.find_iter(text).count()
    }
}

/// Byte offset just past the greedy closing tag for an opening tag whose name
/// ends at `body_start`.
fn closing_end(line: &str, body_start: usize, name: &str) -> Option<usize> {
    let gt = body_start + line[body_start..].find('>')?;
    let closing = format!("</{name}>");
    let rest = gt + 1;
    line[rest..].rfind(&closing).map(|q| rest + q + closing.len())
}
