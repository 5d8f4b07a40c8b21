use corpus_profile_domain::{CorpusProfile, ProfileOptions, Profiler};
use corpus_profile_ports::{CorpusSource, ProgressSink};
use corpus_profile_shared_kernel::{ApplicationError, DomainError, Result};

/// Profiles a corpus source in exactly one pass.
///
/// Any failure (source, malformed unit, cancellation) discards the
/// accumulation; callers get a complete profile or an error.
pub struct ProfileCorpus<'a> {
    source: &'a dyn CorpusSource,
    progress: Option<&'a dyn ProgressSink>,
}

impl<'a> ProfileCorpus<'a> {
    pub fn new(source: &'a dyn CorpusSource) -> Self {
        Self { source, progress: None }
    }

    pub fn with_progress(mut self, progress: &'a dyn ProgressSink) -> Self {
        self.progress = Some(progress);
        self
    }

    pub fn run(&self, options: &ProfileOptions) -> Result<CorpusProfile> {
        let name = self.source.name();
        log::debug!("profiling '{name}' with {options:?}");
        match self.accumulate(options) {
            Ok(profile) => {
                log::info!("profiled {} units from '{name}'", profile.units());
                Ok(profile)
            }
            Err(err) => {
                log::error!("profiling '{name}' aborted: {err}");
                Err(err)
            }
        }
    }

    fn accumulate(&self, options: &ProfileOptions) -> Result<CorpusProfile> {
        let mut profiler = Profiler::new(*options)?;

        for (position, unit) in self.source.units()?.enumerate() {
            let text = unit?
                .into_text()
                .map_err(|unit| DomainError::MalformedUnit { position, kind: unit.kind() })?;
            profiler.observe(&text);

            if let Some(progress) = self.progress {
                progress.on_unit(position).map_err(|err| {
                    log::debug!("progress sink stopped the pass: {err}");
                    ApplicationError::Cancelled { position }
                })?;
            }
        }

        if let Some(progress) = self.progress {
            progress.on_complete(profiler.units())?;
        }
        Ok(profiler.finish())
    }
}
