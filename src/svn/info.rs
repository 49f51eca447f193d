//! Branch identification via `svn info`.

use tracing::debug;

use crate::error::SvnError;

use super::command::SvnClient;
use super::xml::parse_relative_urls;

/// Repository-relative URL (`^/branches/x`) of `path`, percent-decoded.
///
/// The info document must contain exactly one `relative-url`.
pub fn relative_url<C: SvnClient + ?Sized>(client: &C, path: &str) -> Result<String, SvnError> {
    let xml = client.info(path)?;
    let mut urls = parse_relative_urls(&xml, &format!("svn info --xml {}", path))?;

    if urls.len() != 1 {
        return Err(SvnError::UnexpectedCount {
            what: "relative-url",
            path: path.to_string(),
            expected: 1,
            actual: urls.len(),
        });
    }

    let raw = urls.remove(0);
    let decoded = String::from_utf8_lossy(&urlencoding::decode_binary(raw.as_bytes())).into_owned();
    debug!("relative url of {}: {}", path, decoded);
    Ok(decoded)
}
