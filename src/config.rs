// src/config.rs
// =============================================================================
// Settings for the directory fetcher.
//
// Values come from the command line (or the REPO_MEDIA_API_URL environment
// variable, see cli.rs) and are validated once here, before any client is
// built.
// =============================================================================

use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Public GitHub REST API
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// GitHub refuses API requests that carry no User-Agent
pub const DEFAULT_USER_AGENT: &str = concat!("repo-media/", env!("CARGO_PKG_VERSION"));

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid API URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("API URL must use http or https, got '{0}'")]
    UnsupportedScheme(String),

    #[error("Timeout must be at least one second")]
    ZeroTimeout,
}

/// How to reach the contents API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    pub api_base: Url,
    pub timeout: Duration,
    pub user_agent: String,
}

impl FetchConfig {
    pub fn new(api_url: &str, timeout_secs: u64) -> Result<Self, ConfigError> {
        let api_base = Url::parse(api_url).map_err(|source| ConfigError::InvalidUrl {
            url: api_url.to_string(),
            source,
        })?;

        if !matches!(api_base.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme(api_url.to_string()));
        }

        if timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }

        Ok(Self {
            api_base,
            timeout: Duration::from_secs(timeout_secs),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        })
    }
}
