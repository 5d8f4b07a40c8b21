pub mod profiler;
pub mod summary;

pub use profiler::{Profiler, profile_texts};
pub use summary::ProfileSummary;
