// crates/ports/src/progress.rs
use corpus_profile_shared_kernel::Result;

/// Receives progress while a pass runs. Returning `Err` from
/// [`on_unit`](Self::on_unit) aborts the pass.
pub trait ProgressSink: Send + Sync {
    /// Called after the unit at zero-based `position` was accumulated.
    fn on_unit(&self, position: usize) -> Result<()>;
    fn on_complete(&self, units: usize) -> Result<()>;
}
