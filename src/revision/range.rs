//! Revision range expansion.
//!
//! Subversion writes merged revisions as a compact list such as
//! `r102-200,202`: comma-separated tokens that are either one revision or an
//! inclusive `start-stop` interval.

use std::str::FromStr;

use crate::error::RangeError;

/// Prefix svn puts in front of a revision list.
pub const REVISION_PREFIX: char = 'r';

/// Marker svn appends to non-inheritable mergeinfo ranges.
const NON_INHERITABLE_MARKER: char = '*';

/// Every revision covered by a revision range, in token order.
///
/// Overlapping tokens are not deduplicated, so `r1-3,2` yields `[1, 2, 3, 2]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevisionRange {
    revisions: Vec<u64>,
}

impl RevisionRange {
    /// Parse a prefixed range such as `r102-200,202`.
    pub fn parse(input: &str) -> Result<Self, RangeError> {
        let list = input
            .strip_prefix(REVISION_PREFIX)
            .ok_or_else(|| RangeError::MissingPrefix(input.to_string()))?;
        Self::parse_list(list)
    }

    /// Parse the unprefixed form stored in a merge set, such as `102-200,202`.
    pub fn parse_list(list: &str) -> Result<Self, RangeError> {
        let mut revisions = Vec::new();
        for token in list.split(',') {
            let token = token.trim();
            if token.is_empty() {
                return Err(RangeError::EmptyToken(list.to_string()));
            }
            expand_token(token, &mut revisions)?;
        }
        Ok(Self { revisions })
    }

    /// Highest revision in the range.
    pub fn max(&self) -> Option<u64> {
        self.revisions.iter().copied().max()
    }

    pub fn len(&self) -> usize {
        self.revisions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revisions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.revisions.iter().copied()
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.revisions
    }
}

impl FromStr for RevisionRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Append the revisions of a single `N` or `N-M` token.
fn expand_token(token: &str, out: &mut Vec<u64>) -> Result<(), RangeError> {
    let token = token.strip_suffix(NON_INHERITABLE_MARKER).unwrap_or(token);

    if token.matches('-').count() > 1 {
        return Err(RangeError::AmbiguousSeparator(token.to_string()));
    }

    match token.split_once('-') {
        None => out.push(parse_revision(token)?),
        Some((start, stop)) => {
            let start = parse_revision(start)?;
            let stop = parse_revision(stop)?;
            if stop < start {
                return Err(RangeError::Descending { start, stop });
            }
            out.extend(start..=stop);
        }
    }

    Ok(())
}

fn parse_revision(s: &str) -> Result<u64, RangeError> {
    let s = s.trim();
    let revision = s
        .parse::<u64>()
        .map_err(|_| RangeError::InvalidNumber(s.to_string()))?;
    if revision == 0 {
        return Err(RangeError::ZeroRevision);
    }
    Ok(revision)
}
