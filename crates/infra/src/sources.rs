//! File-backed and in-memory corpus sources.
//!
//! Every source reports its lifecycle to an injected [`SourceObserver`]
//! ([`NoopObserver`] unless replaced) and opens its backing file afresh on
//! each pass.

pub mod jsonl;
pub mod lines;
pub mod memory;
pub mod tsv;

use std::{
    fs::File,
    io::BufReader,
    path::Path,
    sync::Arc,
};

use corpus_profile_ports::{NoopObserver, RawUnit, SourceObserver};
use corpus_profile_shared_kernel::{CorpusProfileError, InfrastructureError, Result};

use crate::persistence::FileReader;

pub use jsonl::JsonlSource;
pub use lines::LineSource;
pub use memory::InMemorySource;
pub use tsv::TsvSource;

pub(crate) fn default_observer() -> Arc<dyn SourceObserver> {
    Arc::new(NoopObserver)
}

/// Opens `path`, reporting the outcome to `observer`.
pub(crate) fn open_observed(observer: &dyn SourceObserver, name: &str, path: &Path) -> Result<BufReader<File>> {
    observer.resolving(name);
    match FileReader::open_buffered(path) {
        Ok(reader) => {
            observer.opened(name);
            Ok(reader)
        }
        Err(err) => {
            let err = unavailable(name, err.to_string(), Some(err));
            observer.open_failed(name, &err);
            Err(err)
        }
    }
}

pub(crate) fn unavailable(name: &str, reason: String, source: Option<std::io::Error>) -> CorpusProfileError {
    InfrastructureError::SourceUnavailable { source_name: name.to_string(), reason, source }.into()
}

pub(crate) fn iteration_error(name: &str, line: usize, details: impl Into<String>) -> CorpusProfileError {
    InfrastructureError::SourceIteration { source_name: name.to_string(), line, details: details.into() }.into()
}

/// Ends the stream after the first error and reports exhaustion once.
pub(crate) struct Observed<I> {
    inner: I,
    observer: Arc<dyn SourceObserver>,
    name: String,
    units: usize,
    done: bool,
}

impl<I> Observed<I> {
    pub(crate) fn new(inner: I, observer: Arc<dyn SourceObserver>, name: String) -> Self {
        Self { inner, observer, name, units: 0, done: false }
    }
}

impl<I> Iterator for Observed<I>
where
    I: Iterator<Item = Result<RawUnit>>,
{
    type Item = Result<RawUnit>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.inner.next() {
            Some(Ok(unit)) => {
                self.units += 1;
                Some(Ok(unit))
            }
            Some(Err(err)) => {
                self.done = true;
                Some(Err(err))
            }
            None => {
                self.done = true;
                self.observer.exhausted(&self.name, self.units);
                None
            }
        }
    }
}
