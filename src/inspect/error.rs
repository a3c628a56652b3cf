//! Inspection error types.

use thiserror::Error;

/// Errors that can occur when exporting a machine snapshot
#[derive(Debug, Error)]
pub enum InspectError {
    /// Encoding the snapshot as JSON failed
    #[error("Snapshot serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
