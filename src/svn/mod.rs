//! Subversion operations via the system `svn` client.

pub mod command;
pub mod info;
pub mod log;
pub mod xml;

pub use command::{DEFAULT_SVN_PROGRAM, SvnClient, SystemSvn};
pub use info::relative_url;
pub use log::{LogEntry, fetch_log};
