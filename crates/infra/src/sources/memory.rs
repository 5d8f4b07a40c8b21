use std::sync::Arc;

use corpus_profile_ports::{CorpusSource, RawUnit, SourceObserver, UnitStream};
use corpus_profile_shared_kernel::{CorpusProfileError, Result};

use super::{Observed, default_observer};

/// Corpus held in memory. Re-iterable any number of times.
#[derive(Clone)]
pub struct InMemorySource {
    units: Vec<RawUnit>,
    observer: Arc<dyn SourceObserver>,
}

impl InMemorySource {
    pub fn new(units: Vec<RawUnit>) -> Self {
        Self { units, observer: default_observer() }
    }

    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(texts.into_iter().map(|t| RawUnit::Text(t.into())).collect())
    }

    pub fn with_observer(mut self, observer: Arc<dyn SourceObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

impl CorpusSource for InMemorySource {
    fn name(&self) -> String {
        format!("memory[{}]", self.units.len())
    }

    fn units(&self) -> Result<UnitStream<'_>> {
        let name = self.name();
        self.observer.resolving(&name);
        self.observer.opened(&name);
        let units = self.units.iter().cloned().map(Ok::<_, CorpusProfileError>);
        Ok(Box::new(Observed::new(units, Arc::clone(&self.observer), name)))
    }
}
