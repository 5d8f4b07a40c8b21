// crates/ports/src/observer.rs
use corpus_profile_shared_kernel::CorpusProfileError;

/// Lifecycle events reported by a corpus source.
///
/// Injected into each source instead of a process-wide logger.
pub trait SourceObserver: Send + Sync {
    /// The source resolved where it reads from (path, field, ...).
    fn resolving(&self, source: &str);
    fn opened(&self, source: &str);
    /// The source could not be opened; the error is returned to the caller afterwards.
    fn open_failed(&self, source: &str, error: &CorpusProfileError);
    fn exhausted(&self, source: &str, units: usize);
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SourceObserver for NoopObserver {
    fn resolving(&self, _source: &str) {}

    fn opened(&self, _source: &str) {}

    fn open_failed(&self, _source: &str, _error: &CorpusProfileError) {}

    fn exhausted(&self, _source: &str, _units: usize) {}
}
