use crate::error::ConfigError;

pub const BACKEND_URL_VAR: &str = "QUALITRACK_BACKEND_URL";
pub const BACKEND_ANON_KEY_VAR: &str = "QUALITRACK_BACKEND_ANON_KEY";
pub const STORAGE_PREFIX_VAR: &str = "QUALITRACK_STORAGE_PREFIX";

pub const DEFAULT_STORAGE_PREFIX: &str = "qualitrack";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the backend's REST gateway, without trailing slash
    pub backend_url: String,
    /// Public API key sent with every backend request
    pub backend_anon_key: String,
    /// Prefix of every durable storage key written by the client
    pub storage_prefix: String,
}

impl Config {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Reads configuration captured from the environment at compile time.
    ///
    /// The web build has no process environment, so the values are baked in
    /// when the bundle is built.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| {
            match var {
                BACKEND_URL_VAR => option_env!("QUALITRACK_BACKEND_URL"),
                BACKEND_ANON_KEY_VAR => option_env!("QUALITRACK_BACKEND_ANON_KEY"),
                STORAGE_PREFIX_VAR => option_env!("QUALITRACK_STORAGE_PREFIX"),
                _ => None,
            }
            .map(str::to_string)
        })
    }

    /// Builds configuration from any variable lookup.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(ConfigError::MissingEnvVar)` - A required variable is absent or empty
    /// - `Err(ConfigError::InvalidEnvValue)` - A variable failed validation
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |var: &str| {
            lookup(var)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
        };

        let backend_url = required(BACKEND_URL_VAR)?;
        if !(backend_url.starts_with("http://") || backend_url.starts_with("https://")) {
            return Err(ConfigError::InvalidEnvValue {
                var: BACKEND_URL_VAR.to_string(),
                reason: "must start with http:// or https://".to_string(),
            });
        }

        let backend_anon_key = required(BACKEND_ANON_KEY_VAR)?;

        let storage_prefix = lookup(STORAGE_PREFIX_VAR)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_STORAGE_PREFIX.to_string());
        if !storage_prefix
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(ConfigError::InvalidEnvValue {
                var: STORAGE_PREFIX_VAR.to_string(),
                reason: "may only contain ASCII letters, digits, '_' and '-'".to_string(),
            });
        }

        Ok(Self {
            backend_url: backend_url.trim_end_matches('/').to_string(),
            backend_anon_key,
            storage_prefix,
        })
    }
}
