//! Log line cleanup.

use std::sync::LazyLock;

use regex_lite::Regex;

/// Issue tracker ids such as `ABC-123`.
static TICKET_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z]{2,3}-[0-9]+").expect("ticket id pattern is valid"));

/// A colon and the whitespace around it.
static COLON_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*:\s*").expect("colon pattern is valid"));

/// Three or more periods.
static ELLIPSIS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.{3,}").expect("ellipsis pattern is valid"));

/// Strip ticket ids, colons and ellipses from a log line, then trim it.
///
/// Returns `None` when nothing is left.
pub fn clean_line(line: &str) -> Option<String> {
    let line = TICKET_ID.replace_all(line, "");
    let line = COLON_RUN.replace_all(&line, "");
    let line = ELLIPSIS.replace_all(&line, "");
    let line = line.trim();

    if line.is_empty() {
        None
    } else {
        Some(line.to_string())
    }
}
