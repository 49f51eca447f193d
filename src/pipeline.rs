//! The merge message pipeline: mergeinfo → youngest merge → log → message file.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::config::Config;
use crate::error::Error;
use crate::mergeinfo::{YoungestMerge, extract_merge_set, select_youngest};
use crate::message::{MergeSummary, write_message};
use crate::preflight::check_working_dir;
use crate::svn::{SvnClient, SystemSvn, fetch_log, relative_url};

/// Working copy path whose relative URL names the target branch.
pub const TARGET_PATH: &str = "./";

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The working copy holds no pending merge; the message file was not touched.
    NoMerges,
    /// A message was written.
    Written {
        path: PathBuf,
        merge: YoungestMerge,
        revision_count: usize,
    },
}

/// Run the full pipeline against the system svn client.
pub fn run(config: &Config) -> Result<Outcome, Error> {
    check_working_dir(&config.expected_cwd)?;
    let client = SystemSvn::locate(&config.svn_program)?;
    generate(&client, config)
}

/// Generate the merge message using `client` for every svn query.
///
/// All queries finish before the message file is opened, so a failure leaves
/// the file as it was.
pub fn generate<C: SvnClient + ?Sized>(client: &C, config: &Config) -> Result<Outcome, Error> {
    debug!("hook path: {}", config.hook_path.display());

    let Some(merges) = extract_merge_set(client)? else {
        info!("No merges in the working copy. Nothing to write.");
        return Ok(Outcome::NoMerges);
    };

    let merge = select_youngest(&merges)?;
    let entries = fetch_log(client, &merge.path, &merge.revisions)?;
    let source_branch = relative_url(client, &merge.path)?;
    let target_branch = relative_url(client, TARGET_PATH)?;

    let summary = MergeSummary {
        revisions: merge.revisions.clone(),
        source_branch,
        target_branch,
        entries,
    };
    let revision_count = summary.revision_count();

    write_message(&config.message_file, &summary.format())?;

    info!(
        "Wrote merge message for {} revision(s) from {} to {}",
        revision_count,
        merge.path,
        config.message_file.display()
    );

    Ok(Outcome::Written {
        path: config.message_file.clone(),
        merge,
        revision_count,
    })
}
