//! Data source abstraction for receiving row tables from a poller.
//!
//! The SNMP poller itself is an external collaborator. It hands its raw
//! tables to pduwatch either by writing them to a file or by pushing them
//! into an in-process channel.

mod channel;
mod file;

pub use channel::ChannelSource;
pub use file::FileSource;

use std::fmt::Debug;

use pduwatch_types::RowTable;

/// Trait for receiving row tables from various sources.
///
/// # Example
///
/// ```
/// use pduwatch::{DataSource, FileSource};
///
/// let mut source = FileSource::new("rows.json");
/// if let Some(table) = source.poll() {
///     println!("Got {} phases", table.len());
/// }
/// ```
pub trait DataSource: Send + Debug {
    /// Poll for the latest table.
    ///
    /// Returns `Some(table)` if new data is available, `None` otherwise.
    /// This method should be non-blocking.
    fn poll(&mut self) -> Option<RowTable>;

    /// Returns a human-readable description of the source.
    fn description(&self) -> &str;

    /// Returns the error message if an error occurred during the last poll.
    fn error(&self) -> Option<&str>;
}
