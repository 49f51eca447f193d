//! svn-merge-msg - CLI entry point.

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use svn_merge_msg::{Config, Error, Outcome, Verbosity};

/// Write a commit message summarizing the merge pending in the working copy.
///
/// Arguments follow the TortoiseSVN start-commit hook order: PATH MESSAGEFILE CWD.
#[derive(Parser, Debug)]
#[command(name = "svn-merge-msg")]
#[command(about = "Write a commit message summarizing the merge pending in the working copy")]
#[command(version)]
struct Cli {
    /// Path passed by the hook (file listing the commit targets)
    path: PathBuf,

    /// File receiving the generated message (overwritten)
    message_file: PathBuf,

    /// Directory the hook expects to run in
    cwd: PathBuf,

    /// Enable debug output and full error reports
    #[arg(short, long)]
    debug: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbosity = Verbosity::from_debug_flag(cli.debug);

    init_tracing(verbosity);

    let config = Config::new(cli.path, cli.message_file, cli.cwd, verbosity);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err, verbosity);
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> Result<()> {
    let outcome = svn_merge_msg::run(config).context("Failed to generate merge commit message")?;

    if let Outcome::Written { path, merge, .. } = outcome {
        tracing::debug!("merge message for {} written to {}", merge.path, path.display());
    }

    Ok(())
}

/// Send tracing output to stderr, keeping stdout free for the hook.
fn init_tracing(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.default_log_filter()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();
}

/// Print a failed run: the full error chain in debug mode, otherwise a single
/// `<kind> : <message>` line.
fn report(err: &anyhow::Error, verbosity: Verbosity) {
    if verbosity.is_debug() {
        eprintln!("Error: {:?}", err);
        return;
    }

    match err.chain().find_map(|cause| cause.downcast_ref::<Error>()) {
        Some(cause) => eprintln!("{} : {}", cause.kind(), cause),
        None => eprintln!("Error : {}", err),
    }
}
