use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum StorageError {
    /// Durable storage is not available (private browsing, no window)
    #[error("Durable storage is unavailable")]
    Unavailable,
    #[error("Failed to write storage key {key}: {reason}")]
    Write { key: String, reason: String },
    #[error("Failed to serialize stored value for {key}: {reason}")]
    Serialize { key: String, reason: String },
}
