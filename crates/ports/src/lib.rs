//! # Ports
//!
//! Interface definitions for external collaborators.
//!
//! This crate defines traits that abstract external concerns:
//!
//! - [`source`]: corpus sources yielding raw text units
//! - [`observer`]: lifecycle events a source reports (logging hook)
//! - [`progress`]: progress reporting and cooperative cancellation
//!
//! These ports allow the domain and application layers to remain
//! independent of specific implementations.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod observer;
pub mod progress;
pub mod source;

pub use observer::{NoopObserver, SourceObserver};
pub use progress::ProgressSink;
pub use source::{CorpusSource, DEFAULT_PREVIEW, RawUnit, UnitStream};
