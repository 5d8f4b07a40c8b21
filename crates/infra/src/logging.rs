// crates/infra/src/logging.rs
use corpus_profile_ports::{ProgressSink, SourceObserver};
use corpus_profile_shared_kernel::{CorpusProfileError, Result};

/// Forwards source lifecycle events to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl SourceObserver for LogObserver {
    fn resolving(&self, source: &str) {
        log::debug!("using corpus source '{source}'");
    }

    fn opened(&self, source: &str) {
        log::info!("opened corpus source '{source}'");
    }

    fn open_failed(&self, source: &str, error: &CorpusProfileError) {
        log::error!("failed to open corpus source '{source}': {error}");
    }

    fn exhausted(&self, source: &str, units: usize) {
        log::debug!("corpus source '{source}' exhausted after {units} units");
    }
}

/// Progress sink that logs every `interval` units. Never cancels.
#[derive(Debug, Clone, Copy)]
pub struct LogProgress {
    interval: usize,
}

impl LogProgress {
    pub const DEFAULT_INTERVAL: usize = 10_000;

    /// An `interval` of zero is treated as one.
    pub fn new(interval: usize) -> Self {
        Self { interval: interval.max(1) }
    }
}

impl Default for LogProgress {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INTERVAL)
    }
}

impl ProgressSink for LogProgress {
    fn on_unit(&self, position: usize) -> Result<()> {
        let done = position + 1;
        if done % self.interval == 0 {
            log::info!("profiled {done} units");
        }
        Ok(())
    }

    fn on_complete(&self, units: usize) -> Result<()> {
        log::info!("profiling complete: {units} units");
        Ok(())
    }
}
