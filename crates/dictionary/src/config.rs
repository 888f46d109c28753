use std::{env, fmt, time::Duration};

pub const DEFAULT_BASE_URL: &str = "https://www.dictionaryapi.com/api/v3/references/collegiate/json/";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

pub const API_KEY_VAR: &str = "MW_API_KEY";
pub const BASE_URL_VAR: &str = "MW_BASE_URL";
pub const TIMEOUT_VAR: &str = "MW_TIMEOUT_SECS";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("MW_API_KEY environment variable is not set")]
    MissingApiKey,

    #[error("MW_TIMEOUT_SECS must be a whole number of seconds, got {0:?}")]
    InvalidTimeout(String),

    #[error("{0:?} is not a usable base url")]
    InvalidBaseUrl(String),
}

/// Settings for the collegiate dictionary client.
#[derive(Clone)]
pub struct DictionaryConfig {
    pub api_key: String,
    /// The looked up word is appended to this as one more path segment.
    pub base_url: String,
    pub timeout: Duration,
}

impl DictionaryConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Reads the configuration from the process environment. The api key
    /// is required, everything else falls back to the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_key = lookup(API_KEY_VAR)
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;
        let mut config = Self::new(api_key.trim());
        if let Some(base_url) = lookup(BASE_URL_VAR) {
            config.base_url = base_url;
        }
        if let Some(timeout) = lookup(TIMEOUT_VAR) {
            let seconds = timeout
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidTimeout(timeout.clone()))?;
            config.timeout = Duration::from_secs(seconds);
        }
        Ok(config)
    }
}

impl fmt::Debug for DictionaryConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DictionaryConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_vars(vars: &[(&str, &str)]) -> Result<DictionaryConfig, ConfigError> {
        let vars = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<String, String>>();
        DictionaryConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn missing_key_is_an_error() {
        assert!(matches!(from_vars(&[]), Err(ConfigError::MissingApiKey)));
        assert!(matches!(
            from_vars(&[(API_KEY_VAR, "   ")]),
            Err(ConfigError::MissingApiKey)
        ));
    }

    #[test]
    fn defaults() {
        let config = from_vars(&[(API_KEY_VAR, "secret")]).unwrap();
        assert_eq!(config.api_key, "secret");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn overrides() {
        let config = from_vars(&[
            (API_KEY_VAR, "secret"),
            (BASE_URL_VAR, "http://localhost:1234/"),
            (TIMEOUT_VAR, "3"),
        ])
        .unwrap();
        assert_eq!(config.base_url, "http://localhost:1234/");
        assert_eq!(config.timeout, Duration::from_secs(3));
    }

    #[test]
    fn bad_timeout() {
        let result = from_vars(&[(API_KEY_VAR, "secret"), (TIMEOUT_VAR, "soon")]);
        assert!(matches!(result, Err(ConfigError::InvalidTimeout(value)) if value == "soon"));
    }

    #[test]
    fn debug_hides_the_key() {
        let config = DictionaryConfig::new("secret");
        assert!(!format!("{config:?}").contains("secret"));
    }
}
