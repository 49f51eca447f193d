//! Selection of the most recent merge source.

use tracing::debug;

use crate::error::MergeInfoError;
use crate::revision::RevisionRange;

use super::set::MergeSet;

/// The merge source whose highest merged revision is the greatest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YoungestMerge {
    /// Source path, rooted at `^`.
    pub path: String,
    /// Merged revisions as recorded in mergeinfo, e.g. `200-202`.
    pub revisions: String,
    /// Highest revision of `revisions`.
    pub max_revision: u64,
}

/// Pick the source with the greatest maximum revision.
///
/// Two sources sharing that maximum is an error: there is no rule for
/// choosing between them.
pub fn select_youngest(set: &MergeSet) -> Result<YoungestMerge, MergeInfoError> {
    let mut youngest: Option<YoungestMerge> = None;
    let mut tied_with: Option<String> = None;

    for (path, revisions) in set.iter() {
        let range =
            RevisionRange::parse_list(revisions).map_err(|source| MergeInfoError::InvalidRange {
                path: path.to_string(),
                source,
            })?;
        let Some(max_revision) = range.max() else {
            continue;
        };

        match &youngest {
            Some(current) if max_revision < current.max_revision => {}
            Some(current) if max_revision == current.max_revision => {
                tied_with = Some(path.to_string());
            }
            _ => {
                youngest = Some(YoungestMerge {
                    path: path.to_string(),
                    revisions: revisions.to_string(),
                    max_revision,
                });
                tied_with = None;
            }
        }
    }

    let youngest = youngest.ok_or(MergeInfoError::NoMergeSources)?;

    if let Some(second) = tied_with {
        return Err(MergeInfoError::AmbiguousYoungest {
            revision: youngest.max_revision,
            first: youngest.path,
            second,
        });
    }

    debug!("mergesource: ({}, {})", youngest.path, youngest.revisions);
    Ok(youngest)
}
