//! svn CLI spawning.
//!
//! All queries shell out to the system `svn` binary, inheriting the user's
//! existing configuration and cached credentials.

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use crate::error::SvnError;

/// Program name used when no override is configured.
pub const DEFAULT_SVN_PROGRAM: &str = "svn";

/// The three queries the pipeline needs from Subversion.
///
/// This abstraction allows mocking the svn subprocess in tests.
#[cfg_attr(test, mockall::automock)]
pub trait SvnClient {
    /// Property-only, non-recursive diff of the current directory.
    fn property_diff(&self) -> Result<String, SvnError>;

    /// `svn log --xml` of `path` restricted to `revisions` (e.g. `200-202`).
    fn log(&self, path: &str, revisions: &str) -> Result<String, SvnError>;

    /// `svn info --xml` of `path`.
    fn info(&self, path: &str) -> Result<String, SvnError>;
}

/// Client that runs a real svn executable.
#[derive(Debug, Clone)]
pub struct SystemSvn {
    program: PathBuf,
}

impl SystemSvn {
    /// Resolve `program` on `PATH` (or as a path) and check it is executable.
    ///
    /// Uses the `which` crate so the lookup behaves the same on Windows,
    /// where hooks run under TortoiseSVN, and on Unix.
    pub fn locate(program: &str) -> Result<Self, SvnError> {
        let program = which::which(program).map_err(|_| SvnError::NotInstalled(program.to_string()))?;
        debug!("using svn executable {}", program.display());
        Ok(Self { program })
    }

    /// Use `program` as is, without looking it up.
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Run svn with `args` and return its stdout.
    ///
    /// On a non-zero exit the full captured output is printed to stderr
    /// before the error is returned.
    fn run(&self, args: &[&str]) -> Result<String, SvnError> {
        let command_line = format!("{} {}", self.program.display(), args.join(" "));
        debug!("running {}", command_line);

        let output = Command::new(&self.program)
            .args(args)
            .arg("--non-interactive")
            .env("LC_MESSAGES", "C")
            .output()
            .map_err(|source| SvnError::SpawnFailed {
                program: self.program.display().to_string(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let code = output.status.code();
            eprintln!("cmd: {}", command_line);
            eprintln!(
                "failed with exit code: {}",
                code.map_or("unknown".to_string(), |c| c.to_string())
            );
            eprintln!("stdout:\n{}", stdout);
            eprintln!("stderr:\n{}", stderr);

            return Err(SvnError::NonZeroExit {
                command: command_line,
                code,
                output: format!("{}{}", stdout, stderr),
            });
        }

        Ok(stdout)
    }
}

impl SvnClient for SystemSvn {
    fn property_diff(&self) -> Result<String, SvnError> {
        self.run(&["diff", "--properties-only", "-N", "./"])
    }

    fn log(&self, path: &str, revisions: &str) -> Result<String, SvnError> {
        self.run(&["log", path, "--xml", "-c", revisions])
    }

    fn info(&self, path: &str) -> Result<String, SvnError> {
        self.run(&["info", "--xml", path])
    }
}
