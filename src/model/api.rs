use serde::{Deserialize, Serialize};

/// Error body returned by the backend's REST gateway for a failed request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorDto {
    /// The error message
    pub message: String,
    /// Backend specific error code, if any
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub hint: Option<String>,
}
