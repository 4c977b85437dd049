//! Error types for the Qualitrack client.
//!
//! Each domain (configuration, backend requests, durable storage, auditor
//! session, finding workflow) has its own error enum. They are aggregated into
//! [`Error`] so write paths can use `?` across domains. Read paths feeding the
//! UI never surface these errors directly; they log and degrade instead.

pub mod backend;
pub mod config;
pub mod finding;
pub mod session;
pub mod storage;

use thiserror::Error;

pub use backend::BackendError;
pub use config::ConfigError;
pub use finding::FindingError;
pub use session::SessionError;
pub use storage::StorageError;

/// Main error type for the Qualitrack client.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Backend request error (transport, status, response parsing).
    #[error(transparent)]
    BackendError(#[from] BackendError),
    /// Durable client-side storage error.
    #[error(transparent)]
    StorageError(#[from] StorageError),
    /// Auditor session error (role or assignment preconditions).
    #[error(transparent)]
    SessionError(#[from] SessionError),
    /// Finding workflow error (invalid transition or missing input).
    #[error(transparent)]
    FindingError(#[from] FindingError),
}

impl Error {
    /// Message suitable for showing to the user in a notification.
    ///
    /// Backend and storage failures are reduced to a generic message to avoid
    /// leaking request details, the full error is expected to be logged by the caller.
    pub fn user_message(&self) -> String {
        match self {
            Self::BackendError(_) => {
                "Could not reach the server, please try again.".to_string()
            }
            Self::StorageError(_) => "Could not save your selection on this device.".to_string(),
            err => err.to_string(),
        }
    }
}
