//! Store error types.
//!
//! Nothing here escapes the crate's public operations: reads fall back to
//! defaults and writes swallow failures. The error type exists so the log
//! line on a failed write can say what actually went wrong.

use thiserror::Error;

/// Internal storage errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
