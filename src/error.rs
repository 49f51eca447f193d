//! Error types for svn-merge-msg modules using thiserror.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from parsing a revision range such as `r102-200,202`.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RangeError {
    #[error("Revision range '{0}' does not start with 'r'")]
    MissingPrefix(String),

    #[error("Revision range '{0}' contains an empty token")]
    EmptyToken(String),

    #[error("Revision token '{0}' contains more than one range separator")]
    AmbiguousSeparator(String),

    #[error("Revision token '{0}' is not a number")]
    InvalidNumber(String),

    #[error("Revision range {start}-{stop} ends before it starts")]
    Descending { start: u64, stop: u64 },

    #[error("Revision 0 is not a valid merge source revision")]
    ZeroRevision,
}

impl RangeError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingPrefix(_) => "MissingPrefix",
            Self::EmptyToken(_) => "EmptyToken",
            Self::AmbiguousSeparator(_) => "AmbiguousSeparator",
            Self::InvalidNumber(_) => "InvalidNumber",
            Self::Descending { .. } => "Descending",
            Self::ZeroRevision => "ZeroRevision",
        }
    }
}

/// Errors from decoding mergeinfo and selecting the youngest merge.
#[derive(Error, Debug)]
pub enum MergeInfoError {
    #[error("Malformed mergeinfo line '{line}': {reason}")]
    MalformedLine { line: String, reason: &'static str },

    #[error("Invalid revisions for merge source {path}: {source}")]
    InvalidRange {
        path: String,
        #[source]
        source: RangeError,
    },

    #[error("No merge sources to choose from")]
    NoMergeSources,

    #[error(
        "Merge sources {first} and {second} both end at r{revision}; cannot pick the youngest merge"
    )]
    AmbiguousYoungest {
        revision: u64,
        first: String,
        second: String,
    },
}

impl MergeInfoError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MalformedLine { .. } => "MalformedLine",
            Self::InvalidRange { source, .. } => source.kind(),
            Self::NoMergeSources => "NoMergeSources",
            Self::AmbiguousYoungest { .. } => "AmbiguousYoungest",
        }
    }
}

/// Errors from svn CLI operations.
#[derive(Error, Debug)]
pub enum SvnError {
    #[error("svn executable '{0}' not found. Install a Subversion command-line client or set SVN_MERGE_MSG_SVN")]
    NotInstalled(String),

    #[error("Failed to spawn '{program}': {source}")]
    SpawnFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{command}' failed with exit code {}", code.map_or("unknown".to_string(), |c| c.to_string()))]
    NonZeroExit {
        command: String,
        code: Option<i32>,
        output: String,
    },

    #[error("'{command}' returned invalid XML: {source}")]
    InvalidXml {
        command: String,
        #[source]
        source: quick_xml::DeError,
    },

    #[error("Expected {expected} {what} for '{path}', found {actual}")]
    UnexpectedCount {
        what: &'static str,
        path: String,
        expected: usize,
        actual: usize,
    },
}

impl SvnError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotInstalled(_) => "NotInstalled",
            Self::SpawnFailed { .. } => "SpawnFailed",
            Self::NonZeroExit { .. } => "NonZeroExit",
            Self::InvalidXml { .. } => "InvalidXml",
            Self::UnexpectedCount { .. } => "UnexpectedCount",
        }
    }
}

/// Errors from writing the commit message file.
#[derive(Error, Debug)]
pub enum MessageError {
    #[error("Failed to write message file {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl MessageError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::WriteFailed { .. } => "WriteFailed",
        }
    }
}

/// Errors from checks made before any svn query.
#[derive(Error, Debug)]
pub enum PreflightError {
    #[error("Expected working directory {0} is not a directory")]
    NotADirectory(PathBuf),

    #[error("Expected working directory {expected} but running in {actual}")]
    CwdMismatch { expected: PathBuf, actual: PathBuf },

    #[error("Failed to inspect working directory: {0}")]
    Io(#[source] std::io::Error),
}

impl PreflightError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotADirectory(_) => "NotADirectory",
            Self::CwdMismatch { .. } => "CwdMismatch",
            Self::Io(_) => "Io",
        }
    }
}

/// Any failure of the message generation pipeline.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Preflight(#[from] PreflightError),

    #[error(transparent)]
    Svn(#[from] SvnError),

    #[error(transparent)]
    MergeInfo(#[from] MergeInfoError),

    #[error(transparent)]
    Range(#[from] RangeError),

    #[error(transparent)]
    Message(#[from] MessageError),
}

impl Error {
    /// Short name of the failure, used for the condensed error report.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Preflight(e) => e.kind(),
            Self::Svn(e) => e.kind(),
            Self::MergeInfo(e) => e.kind(),
            Self::Range(e) => e.kind(),
            Self::Message(e) => e.kind(),
        }
    }
}
