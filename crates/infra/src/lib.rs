// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod logging;
pub mod persistence;
pub mod sources;

pub use logging::{LogObserver, LogProgress};
pub use sources::{InMemorySource, JsonlSource, LineSource, TsvSource};
