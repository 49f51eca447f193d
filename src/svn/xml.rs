//! Decoding of `svn ... --xml` documents.

use serde::Deserialize;

use crate::error::SvnError;

use super::log::LogEntry;

/// `<log>` root of `svn log --xml`.
#[derive(Debug, Deserialize)]
struct LogDocument {
    #[serde(rename = "logentry", default)]
    entries: Vec<LogEntry>,
}

/// `<info>` root of `svn info --xml`.
#[derive(Debug, Deserialize)]
struct InfoDocument {
    #[serde(rename = "entry", default)]
    entries: Vec<InfoEntry>,
}

#[derive(Debug, Deserialize)]
struct InfoEntry {
    #[serde(rename = "relative-url", default)]
    relative_url: Option<String>,
}

/// Decode the `<logentry>` elements of a log document.
pub fn parse_log(xml: &str, command: &str) -> Result<Vec<LogEntry>, SvnError> {
    let document: LogDocument = quick_xml::de::from_str(xml).map_err(|source| SvnError::InvalidXml {
        command: command.to_string(),
        source,
    })?;
    Ok(document.entries)
}

/// Collect every `entry/relative-url` value of an info document.
pub fn parse_relative_urls(xml: &str, command: &str) -> Result<Vec<String>, SvnError> {
    let document: InfoDocument =
        quick_xml::de::from_str(xml).map_err(|source| SvnError::InvalidXml {
            command: command.to_string(),
            source,
        })?;
    Ok(document
        .entries
        .into_iter()
        .filter_map(|entry| entry.relative_url)
        .collect())
}
