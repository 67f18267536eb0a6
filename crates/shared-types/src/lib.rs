pub mod slide;
pub mod types;

pub use slide::{SlideContent, SlideText};
pub use types::{sort_worst_first, CheckResult, FileResults, Severity};
