//! Shared test utilities for integration tests.
//!
//! Not all functions are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use svn_merge_msg::config::{Config, Verbosity};
use svn_merge_msg::{SvnClient, SvnError};

/// Get the path to test fixtures directory.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Get the path to an svn output fixture.
pub fn svn_fixture(name: &str) -> PathBuf {
    fixtures_dir().join("svn").join(name)
}

/// Read a fixture file as a string.
pub fn read_fixture(path: PathBuf) -> String {
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {:?}: {}", path, e))
}

/// Create a temporary directory for test output.
pub fn temp_test_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Config writing `message.txt` inside `dir`.
pub fn test_config(dir: &Path) -> Config {
    Config {
        hook_path: dir.join("targets.tmp"),
        message_file: dir.join("message.txt"),
        expected_cwd: dir.to_path_buf(),
        verbosity: Verbosity::Normal,
        svn_program: "svn".to_string(),
    }
}

/// In-memory svn client answering from canned documents.
///
/// Queries without a canned answer fail like svn does for a missing path.
#[derive(Default)]
pub struct FakeSvn {
    pub property_diff: Option<String>,
    pub logs: HashMap<(String, String), String>,
    pub infos: HashMap<String, String>,
    pub calls: RefCell<Vec<String>>,
}

impl FakeSvn {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_property_diff(mut self, diff: impl Into<String>) -> Self {
        self.property_diff = Some(diff.into());
        self
    }

    pub fn with_log(mut self, path: &str, revisions: &str, xml: impl Into<String>) -> Self {
        self.logs
            .insert((path.to_string(), revisions.to_string()), xml.into());
        self
    }

    pub fn with_info(mut self, path: &str, xml: impl Into<String>) -> Self {
        self.infos.insert(path.to_string(), xml.into());
        self
    }

    /// The canned merge of `^/branches/feature` r200-202 into `^/trunk`.
    pub fn feature_merge() -> Self {
        Self::new()
            .with_property_diff(read_fixture(svn_fixture("property_diff_merge.txt")))
            .with_log(
                "^/branches/feature",
                "200-202",
                read_fixture(svn_fixture("log_feature.xml")),
            )
            .with_info(
                "^/branches/feature",
                read_fixture(svn_fixture("info_feature.xml")),
            )
            .with_info("./", read_fixture(svn_fixture("info_trunk.xml")))
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn missing(&self, command: String) -> SvnError {
        SvnError::NonZeroExit {
            command,
            code: Some(1),
            output: "svn: E160013: path not found".to_string(),
        }
    }
}

impl SvnClient for FakeSvn {
    fn property_diff(&self) -> Result<String, SvnError> {
        self.calls.borrow_mut().push("diff".to_string());
        self.property_diff
            .clone()
            .ok_or_else(|| self.missing("svn diff".to_string()))
    }

    fn log(&self, path: &str, revisions: &str) -> Result<String, SvnError> {
        self.calls
            .borrow_mut()
            .push(format!("log {} {}", path, revisions));
        self.logs
            .get(&(path.to_string(), revisions.to_string()))
            .cloned()
            .ok_or_else(|| self.missing(format!("svn log {}", path)))
    }

    fn info(&self, path: &str) -> Result<String, SvnError> {
        self.calls.borrow_mut().push(format!("info {}", path));
        self.infos
            .get(path)
            .cloned()
            .ok_or_else(|| self.missing(format!("svn info {}", path)))
    }
}

/// A shell script standing in for the svn executable.
///
/// Each query prints a reply file from the script's directory; a query whose
/// reply file is missing exits 1 with an svn-style error.
#[cfg(unix)]
pub struct FakeSvnScript {
    pub dir: tempfile::TempDir,
}

#[cfg(unix)]
impl FakeSvnScript {
    pub fn new() -> Self {
        use std::os::unix::fs::PermissionsExt;

        let dir = temp_test_dir();
        let script = format!(
            r#"#!/bin/sh
DIR='{}'
echo "$*" >> "$DIR/calls.log"
reply() {{
  if [ -f "$DIR/$1" ]; then
    cat "$DIR/$1"
  else
    echo "svn: E170000: no canned reply for $1" >&2
    exit 1
  fi
}}
case "$1" in
  diff) reply diff.txt ;;
  log) reply log.xml ;;
  info)
    if [ "$3" = "./" ]; then reply info_target.xml; else reply info_source.xml; fi ;;
  *) echo "unexpected svn arguments: $*" >&2; exit 1 ;;
esac
"#,
            dir.path().display()
        );

        let path = dir.path().join("svn");
        std::fs::write(&path, script).expect("Failed to write fake svn");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to make fake svn executable");

        Self { dir }
    }

    /// Script answering the canned feature merge.
    pub fn feature_merge() -> Self {
        let script = Self::new();
        script.reply("diff.txt", &read_fixture(svn_fixture("property_diff_merge.txt")));
        script.reply("log.xml", &read_fixture(svn_fixture("log_feature.xml")));
        script.reply("info_source.xml", &read_fixture(svn_fixture("info_feature.xml")));
        script.reply("info_target.xml", &read_fixture(svn_fixture("info_trunk.xml")));
        script
    }

    pub fn reply(&self, name: &str, content: &str) {
        std::fs::write(self.dir.path().join(name), content).expect("Failed to write reply");
    }

    pub fn remove_reply(&self, name: &str) {
        std::fs::remove_file(self.dir.path().join(name)).expect("Failed to remove reply");
    }

    pub fn program(&self) -> PathBuf {
        self.dir.path().join("svn")
    }

    /// Argument lists the script was called with, one per call.
    pub fn calls(&self) -> Vec<String> {
        std::fs::read_to_string(self.dir.path().join("calls.log"))
            .map(|log| log.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }
}
