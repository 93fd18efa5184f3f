// Profile completion scoring and its HTTP handler.

pub mod completeness;
pub mod handlers;

pub use completeness::{completion_report, score_completion, CompletionReport};
