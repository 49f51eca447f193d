//! svn-merge-msg - writes a commit message summarizing a pending Subversion merge.
//!
//! # Overview
//!
//! Run as a TortoiseSVN start-commit hook, svn-merge-msg reads the svn:mergeinfo
//! changes of the working copy, picks the most recently merged source, fetches the
//! log of the merged revisions and writes a cleaned-up summary to the message file.

pub mod config;
pub mod error;
pub mod mergeinfo;
pub mod message;
pub mod pipeline;
pub mod preflight;
pub mod revision;
pub mod svn;

// Re-export commonly used types
pub use config::{Config, Verbosity};
pub use error::{Error, MergeInfoError, MessageError, PreflightError, RangeError, SvnError};
pub use mergeinfo::{MergeSet, YoungestMerge};
pub use message::MergeSummary;
pub use pipeline::{Outcome, generate, run};
pub use revision::RevisionRange;
pub use svn::{LogEntry, SvnClient, SystemSvn};
