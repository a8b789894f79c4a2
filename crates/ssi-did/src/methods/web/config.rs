use std::time::Duration;

use crate::methods::errors::ConfigError;

const TIMEOUT_VAR: &str = "DID_WEB_TIMEOUT_SECS";
const ALLOW_HTTP_LOCALHOST_VAR: &str = "DID_WEB_ALLOW_HTTP_LOCALHOST";

/// Settings of the did:web resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DidWebConfig {
    /// Upper bound on fetching and reading a DID document.
    pub timeout: Duration,
    /// Fetch documents of `localhost` domains over plain HTTP.
    pub allow_http_localhost: bool,
}

impl Default for DidWebConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            allow_http_localhost: false,
        }
    }
}

impl DidWebConfig {
    /// Loads the settings from `DID_WEB_TIMEOUT_SECS` and `DID_WEB_ALLOW_HTTP_LOCALHOST`,
    /// falling back to the defaults for unset variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(TIMEOUT_VAR) {
            let secs: u64 = value.trim().parse().map_err(|_| ConfigError::InvalidValue {
                name: TIMEOUT_VAR,
                value: value.clone(),
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        if let Some(value) = lookup(ALLOW_HTTP_LOCALHOST_VAR) {
            config.allow_http_localhost = match value.trim().to_ascii_lowercase().as_str() {
                "true" | "1" => true,
                "false" | "0" => false,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        name: ALLOW_HTTP_LOCALHOST_VAR,
                        value,
                    })
                }
            };
        }

        Ok(config)
    }
}
