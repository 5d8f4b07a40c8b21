//! Text normalisation, tokenization and surface pattern matching.

pub mod patterns;
pub mod tokenizer;

pub use patterns::{TextPatterns, is_blank};
pub use tokenizer::{Tokenizer, bigrams};
