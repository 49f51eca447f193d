//! Log retrieval for a merge source.

use serde::Deserialize;
use tracing::debug;

use crate::error::SvnError;

use super::command::SvnClient;
use super::xml::parse_log;

/// One `<logentry>` of `svn log --xml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LogEntry {
    #[serde(rename = "@revision")]
    pub revision: u64,
    #[serde(default)]
    pub author: Option<String>,
    /// Free text, possibly multi-line and possibly empty.
    #[serde(rename = "msg", default)]
    pub message: String,
}

/// Fetch the log entries of `path` for the revisions in `revisions`.
///
/// `revisions` is passed to `svn log -c` unchanged, so both a single revision
/// and a list such as `200-202,205` are accepted.
pub fn fetch_log<C: SvnClient + ?Sized>(
    client: &C,
    path: &str,
    revisions: &str,
) -> Result<Vec<LogEntry>, SvnError> {
    let xml = client.log(path, revisions)?;
    let entries = parse_log(&xml, &format!("svn log {} -c {}", path, revisions))?;
    debug!("number of revs found: {}", entries.len());
    Ok(entries)
}
