use corpus_profile_ports::{CorpusSource, RawUnit};
use corpus_profile_shared_kernel::Result;

/// Returns the first units of a source without profiling them.
pub struct PreviewCorpus<'a> {
    source: &'a dyn CorpusSource,
}

impl<'a> PreviewCorpus<'a> {
    pub fn new(source: &'a dyn CorpusSource) -> Self {
        Self { source }
    }

    /// Up to `n` units; fewer if the source is shorter.
    pub fn run(&self, n: usize) -> Result<Vec<RawUnit>> {
        let units = self.source.head(n)?;
        log::debug!("previewed {} of up to {n} units from '{}'", units.len(), self.source.name());
        Ok(units)
    }
}
