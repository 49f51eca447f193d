//! Commit message file output.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::MessageError;

/// Write `message` to `path`, replacing any existing content.
///
/// The text goes to a temporary file beside `path` which is then renamed over
/// it, so readers never see a partially written message.
pub fn write_message(path: &Path, message: &str) -> Result<(), MessageError> {
    let write_failed = |source| MessageError::WriteFailed {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir).map_err(write_failed)?;
    file.write_all(message.as_bytes()).map_err(write_failed)?;
    file.flush().map_err(write_failed)?;
    file.persist(path).map_err(|e| write_failed(e.error))?;

    debug!("wrote {} bytes to {}", message.len(), path.display());
    Ok(())
}
