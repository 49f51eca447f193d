//! Subversion revision numbers and revision ranges.

pub mod range;

pub use range::RevisionRange;
