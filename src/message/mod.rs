//! Merge commit message composition and output.

pub mod clean;
pub mod compose;
pub mod writer;

pub use clean::clean_line;
pub use compose::MergeSummary;
pub use writer::write_message;
