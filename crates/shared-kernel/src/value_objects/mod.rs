// crates/shared-kernel/src/value_objects/mod.rs
pub mod counts;
pub mod frequency;

pub use counts::{CharCount, TokenCount};
pub use frequency::FrequencyTable;
