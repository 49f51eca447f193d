//! Merge sources found in the working copy.

use std::collections::BTreeMap;

/// Placeholder svn uses for the repository root in relative URLs.
pub const REPO_ROOT_PLACEHOLDER: &str = "^";

/// Merge source path (`^/branches/x`) to its merged revisions (`102-200,202`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeSet {
    sources: BTreeMap<String, String>,
}

impl MergeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `revisions` for `path`, replacing any earlier value for the same path.
    pub fn insert(&mut self, path: impl Into<String>, revisions: impl Into<String>) {
        self.sources.insert(path.into(), revisions.into());
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.sources.get(path).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.sources
            .iter()
            .map(|(path, revisions)| (path.as_str(), revisions.as_str()))
    }
}

impl<P: Into<String>, R: Into<String>> FromIterator<(P, R)> for MergeSet {
    fn from_iter<I: IntoIterator<Item = (P, R)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (path, revisions) in iter {
            set.insert(path, revisions);
        }
        set
    }
}
