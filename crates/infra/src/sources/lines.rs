use std::{
    io::BufRead,
    path::{Path, PathBuf},
    sync::Arc,
};

use corpus_profile_ports::{CorpusSource, RawUnit, SourceObserver, UnitStream};
use corpus_profile_shared_kernel::Result;

use super::{Observed, default_observer, iteration_error, open_observed};

/// One text unit per line of a UTF-8 file. `\n` and `\r\n` terminators are stripped.
#[derive(Clone)]
pub struct LineSource {
    path: PathBuf,
    observer: Arc<dyn SourceObserver>,
}

impl LineSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), observer: default_observer() }
    }

    pub fn with_observer(mut self, observer: Arc<dyn SourceObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CorpusSource for LineSource {
    fn name(&self) -> String {
        format!("lines:{}", self.path.display())
    }

    fn units(&self) -> Result<UnitStream<'_>> {
        let name = self.name();
        let reader = open_observed(&*self.observer, &name, &self.path)?;
        let source_name = name.clone();
        let units = reader.lines().enumerate().map(move |(index, line)| {
            line.map(RawUnit::Text).map_err(|e| iteration_error(&source_name, index + 1, e.to_string()))
        });
        Ok(Box::new(Observed::new(units, Arc::clone(&self.observer), name)))
    }
}
