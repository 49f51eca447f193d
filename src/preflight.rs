//! Checks made before the working copy is queried.

use std::env;
use std::fs;
use std::io;
use std::path::Path;

use crate::error::PreflightError;

/// Fail unless `expected` is the directory the process runs in.
pub fn check_working_dir(expected: &Path) -> Result<(), PreflightError> {
    let actual = env::current_dir().map_err(PreflightError::Io)?;
    check_same_dir(expected, &actual)
}

/// Fail unless `expected` is an existing directory and the same filesystem
/// object as `actual`.
///
/// Paths that differ as strings still match when they name the same
/// directory (symlinks, `..` components, case on Windows).
pub fn check_same_dir(expected: &Path, actual: &Path) -> Result<(), PreflightError> {
    if !expected.is_dir() {
        return Err(PreflightError::NotADirectory(expected.to_path_buf()));
    }

    if !is_same_dir(expected, actual).map_err(PreflightError::Io)? {
        return Err(PreflightError::CwdMismatch {
            expected: expected.to_path_buf(),
            actual: actual.to_path_buf(),
        });
    }

    Ok(())
}

#[cfg(unix)]
fn is_same_dir(a: &Path, b: &Path) -> io::Result<bool> {
    use std::os::unix::fs::MetadataExt;

    let a = fs::metadata(a)?;
    let b = fs::metadata(b)?;
    Ok(a.dev() == b.dev() && a.ino() == b.ino())
}

#[cfg(not(unix))]
fn is_same_dir(a: &Path, b: &Path) -> io::Result<bool> {
    Ok(fs::canonicalize(a)? == fs::canonicalize(b)?)
}
