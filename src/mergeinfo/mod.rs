//! svn:mergeinfo decoding and merge source selection.

pub mod scanner;
pub mod set;
pub mod youngest;

pub use scanner::{MergeLineMatcher, RegexMatcher, extract_merge_set, parse_property_diff};
pub use set::MergeSet;
pub use youngest::{YoungestMerge, select_youngest};
