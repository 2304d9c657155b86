//! Error types for adapters.

use thiserror::Error;

/// Errors that can occur when matching a row table to a device.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AdapterError {
    /// The row table carries no device signature.
    #[error("Row table has no sysObjectID")]
    MissingSignature,

    /// The signature does not belong to a supported device.
    #[error("Unsupported device: {0}")]
    UnknownDevice(String),
}
