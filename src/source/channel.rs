//! Channel-based data source.
//!
//! Receives row tables via a tokio watch channel. This suits an in-process
//! poller task that pushes a fresh table after every walk.

use tokio::sync::watch;

use pduwatch_types::RowTable;

use super::DataSource;

/// A data source that receives row tables via a channel.
///
/// Only the most recent table is kept; tables pushed between two polls are
/// superseded by the last one.
///
/// # Example
///
/// ```
/// use pduwatch::{ChannelSource, DataSource};
/// use pduwatch_types::RowTable;
///
/// let (tx, mut source) = ChannelSource::create("snmp://pdu-1");
/// tx.send(RowTable::new(vec![vec!["100".into()]])).unwrap();
/// assert_eq!(source.poll().map(|t| t.len()), Some(1));
/// ```
#[derive(Debug)]
pub struct ChannelSource {
    receiver: watch::Receiver<RowTable>,
    description: String,
}

impl ChannelSource {
    /// Create a new channel source.
    ///
    /// # Arguments
    ///
    /// * `receiver` - The receiving end of a watch channel
    /// * `source_description` - Where tables come from (e.g., "snmp://pdu-1")
    pub fn new(receiver: watch::Receiver<RowTable>, source_description: &str) -> Self {
        let description = format!("channel: {}", source_description);
        Self {
            receiver,
            description,
        }
    }

    /// Create a channel pair for sending tables to a ChannelSource.
    ///
    /// The channel's initial empty table is never returned by `poll`.
    pub fn create(source_description: &str) -> (watch::Sender<RowTable>, Self) {
        let (tx, rx) = watch::channel(RowTable::default());
        let source = Self::new(rx, source_description);
        (tx, source)
    }
}

impl DataSource for ChannelSource {
    fn poll(&mut self) -> Option<RowTable> {
        // Unlike `has_changed`, this still reports an unseen value after the
        // sender is dropped
        let changed = self.receiver.borrow().has_changed();
        if changed {
            Some(self.receiver.borrow_and_update().clone())
        } else {
            None
        }
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn error(&self) -> Option<&str> {
        // Transport errors belong to the poller pushing into the channel
        None
    }
}
