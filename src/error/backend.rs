use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum BackendError {
    /// The request never produced a response (network failure, CORS, aborted)
    #[error("Failed to send request: {0}")]
    Request(String),
    /// The gateway answered with a non-success status
    #[error("Request failed with status {status}: {}", .error.message)]
    Status { status: u16, error: ErrorDto },
    /// The response body could not be parsed
    #[error("Failed to parse response for {context}: {reason}")]
    Parse { context: String, reason: String },
    /// A write returned no representation of the affected row
    #[error("No row returned for {0}")]
    MissingRow(String),
    /// No transport is compiled in for the current target
    #[error("No backend transport available on this platform")]
    Unsupported,
}
