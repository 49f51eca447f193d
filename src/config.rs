//! Run configuration.
//!
//! Built once in `main` from the command line and the environment, then
//! passed down the pipeline by reference.

use std::env;
use std::path::PathBuf;

use tracing::warn;

use crate::svn::DEFAULT_SVN_PROGRAM;

/// Environment variable to override the svn executable.
pub const SVN_PROGRAM_ENV_VAR: &str = "SVN_MERGE_MSG_SVN";

/// How much the run reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Warnings only; errors are condensed to `<kind> : <message>`.
    #[default]
    Normal,
    /// Pipeline diagnostics; errors are printed with their full chain.
    Debug,
}

impl Verbosity {
    pub fn from_debug_flag(debug: bool) -> Self {
        if debug { Self::Debug } else { Self::Normal }
    }

    pub fn is_debug(self) -> bool {
        self == Self::Debug
    }

    /// Log filter used when `RUST_LOG` is not set.
    pub fn default_log_filter(self) -> &'static str {
        match self {
            Self::Normal => "warn",
            Self::Debug => "svn_merge_msg=debug",
        }
    }
}

/// Settings for one run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path argument passed by the hook (TortoiseSVN: a file listing the commit targets).
    pub hook_path: PathBuf,
    /// File receiving the generated message.
    pub message_file: PathBuf,
    /// Directory the hook expects to run in.
    pub expected_cwd: PathBuf,
    pub verbosity: Verbosity,
    /// svn executable name or path.
    pub svn_program: String,
}

impl Config {
    /// Build a config, taking the svn executable from the environment.
    pub fn new(
        hook_path: PathBuf,
        message_file: PathBuf,
        expected_cwd: PathBuf,
        verbosity: Verbosity,
    ) -> Self {
        Self {
            hook_path,
            message_file,
            expected_cwd,
            verbosity,
            svn_program: svn_program(),
        }
    }
}

/// Get the configured svn executable.
///
/// Reads from SVN_MERGE_MSG_SVN if set, otherwise uses `svn` from PATH.
/// Logs a warning if the variable only contains whitespace.
fn svn_program() -> String {
    match env::var(SVN_PROGRAM_ENV_VAR) {
        Ok(v) if !v.is_empty() => {
            if v.trim().is_empty() {
                warn!(
                    "Invalid {} value '{}', using default {}",
                    SVN_PROGRAM_ENV_VAR, v, DEFAULT_SVN_PROGRAM
                );
                DEFAULT_SVN_PROGRAM.to_string()
            } else {
                v
            }
        }
        _ => DEFAULT_SVN_PROGRAM.to_string(),
    }
}
