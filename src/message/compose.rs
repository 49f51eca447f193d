//! Merge commit message formatting.

use crate::svn::LogEntry;

use super::clean::clean_line;

/// Everything the merge commit message is built from.
#[derive(Debug, Clone)]
pub struct MergeSummary {
    /// Merged revisions as recorded in mergeinfo, e.g. `200-202`.
    pub revisions: String,
    /// Relative URL of the merge source.
    pub source_branch: String,
    /// Relative URL of the working copy.
    pub target_branch: String,
    /// Log entries of the merged revisions.
    pub entries: Vec<LogEntry>,
}

impl MergeSummary {
    pub fn revision_count(&self) -> usize {
        self.entries.len()
    }

    /// Format the commit message.
    ///
    /// Produces:
    /// ```text
    /// Merged 2 revision(s) 200-202
    /// from: ^/branches/feature
    /// to  : ^/trunk
    ///
    /// fix bug
    /// cleanup
    /// ```
    pub fn format(&self) -> String {
        let mut message = format!(
            "Merged {} revision(s) {}\nfrom: {}\nto  : {}\n\n",
            self.revision_count(),
            self.revisions,
            self.source_branch,
            self.target_branch
        );

        for line in self.body_lines() {
            message.push_str(&line);
            message.push('\n');
        }

        message
    }

    /// Cleaned, non-empty lines of every log message, in log order.
    pub fn body_lines(&self) -> Vec<String> {
        self.entries
            .iter()
            .flat_map(|entry| entry.message.lines())
            .filter_map(clean_line)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(revision: u64, message: &str) -> LogEntry {
        LogEntry {
            revision,
            author: Some("alice".to_string()),
            message: message.to_string(),
        }
    }

    fn summary(entries: Vec<LogEntry>) -> MergeSummary {
        MergeSummary {
            revisions: "200-202".to_string(),
            source_branch: "^/branches/feature".to_string(),
            target_branch: "^/trunk".to_string(),
            entries,
        }
    }

    #[test]
    fn test_format_header_and_body() {
        let summary = summary(vec![entry(200, "AB-1: fix bug"), entry(202, "cleanup...")]);

        assert_eq!(
            summary.format(),
            "Merged 2 revision(s) 200-202\n\
             from: ^/branches/feature\n\
             to  : ^/trunk\n\
             \n\
             fix bug\n\
             cleanup\n"
        );
    }

    #[test]
    fn test_format_without_entries_keeps_header() {
        let summary = summary(Vec::new());
        assert_eq!(
            summary.format(),
            "Merged 0 revision(s) 200-202\nfrom: ^/branches/feature\nto  : ^/trunk\n\n"
        );
    }

    #[test]
    fn test_multi_line_messages_drop_empty_lines() {
        let summary = summary(vec![entry(
            201,
            "XYZ-42: add parser\n\nXYZ-42:\r\n  handle empty input  \n...",
        )]);

        assert_eq!(summary.body_lines(), vec!["add parser", "handle empty input"]);
        assert_eq!(summary.revision_count(), 1);
    }

    #[test]
    fn test_entry_with_empty_message_contributes_nothing() {
        let summary = summary(vec![entry(200, ""), entry(201, "docs")]);
        assert_eq!(summary.body_lines(), vec!["docs"]);
        assert!(summary.format().starts_with("Merged 2 revision(s)"));
    }
}
