//! Merge detection in `svn diff --properties-only` output.
//!
//! A pending merge shows up in the property diff of the working copy root as
//! added svn:mergeinfo lines:
//!
//! ```text
//! Property changes on: .
//! ___________________________________________________________________
//! Modified: svn:mergeinfo
//! ## -0,0 +0,1 ##
//!    Merged /branches/feature:r102-200,202
//! ```

use std::sync::LazyLock;

use regex_lite::Regex;
use tracing::debug;

use crate::error::{Error, MergeInfoError};
use crate::svn::SvnClient;

use super::set::{MergeSet, REPO_ROOT_PLACEHOLDER};

/// Finds the mergeinfo lines in a property diff.
pub trait MergeLineMatcher {
    /// Lines of `diff` that record a merged source, in order of appearance.
    fn merged_lines<'a>(&self, diff: &'a str) -> Vec<&'a str>;
}

static MERGED_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*Merged [^:\n]*:.*$").expect("merged line pattern is valid")
});

/// Matches `Merged <path>:<revisions>` lines with a regular expression.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexMatcher;

impl MergeLineMatcher for RegexMatcher {
    fn merged_lines<'a>(&self, diff: &'a str) -> Vec<&'a str> {
        MERGED_LINE.find_iter(diff).map(|m| m.as_str()).collect()
    }
}

/// Query the working copy and decode its pending merges.
///
/// Returns `None` when the property diff records no merge.
pub fn extract_merge_set<C: SvnClient + ?Sized>(client: &C) -> Result<Option<MergeSet>, Error> {
    let diff = client.property_diff()?;
    Ok(parse_property_diff(&diff, &RegexMatcher)?)
}

/// Decode the merged lines of a property diff into a merge set.
///
/// A path that appears more than once keeps the revisions of its last line.
pub fn parse_property_diff<M: MergeLineMatcher + ?Sized>(
    diff: &str,
    matcher: &M,
) -> Result<Option<MergeSet>, MergeInfoError> {
    let lines = matcher.merged_lines(diff);
    if lines.is_empty() {
        return Ok(None);
    }

    let mut set = MergeSet::new();
    for line in lines {
        let (path, revisions) = parse_merged_line(line)?;
        debug!("merge-path: {}", path);
        debug!("merge-changes: {}", revisions);
        set.insert(path, revisions);
    }

    Ok(Some(set))
}

/// Split `   Merged /branches/a:r10-20` into (`^/branches/a`, `10-20`).
///
/// Everything before the first `/` is replaced by the repository root
/// placeholder and the `r` prefix is removed from the revisions.
pub fn parse_merged_line(line: &str) -> Result<(String, String), MergeInfoError> {
    let malformed = |reason: &'static str| MergeInfoError::MalformedLine {
        line: line.trim().to_string(),
        reason,
    };

    let (path, revisions) = line.split_once(':').ok_or_else(|| malformed("missing ':'"))?;

    let root = path
        .find('/')
        .ok_or_else(|| malformed("merge path has no '/'"))?;
    let path = format!("{}{}", REPO_ROOT_PLACEHOLDER, path[root..].trim_end());

    let revisions = revisions
        .trim()
        .strip_prefix('r')
        .ok_or_else(|| malformed("revisions do not start with 'r'"))?
        .trim()
        .to_string();

    Ok((path, revisions))
}
