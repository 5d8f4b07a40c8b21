//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! This crate coordinates domain logic and corpus source ports
//! to implement specific use cases:
//!
//! - [`orchestrator`]: one profiling pass over a corpus source
//! - [`preview`]: bounded preview of the first units of a source
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod orchestrator;
pub mod preview;

pub use orchestrator::ProfileCorpus;
pub use preview::PreviewCorpus;
