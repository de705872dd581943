//! Configuration model loaded from external sources.

use serde::Deserialize;

/// Basic configuration shared across the binary and the HTTP backend.
#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    /// Base URL of the CRM backend, e.g. `https://crm.example.com/api`.
    pub api_base_url: String,
    /// Per-request timeout; a request that never resolves becomes an
    /// ordinary fetch failure after this many seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl AppConfig {
    /// Loads configuration from an optional YAML file, then `CRM_`-prefixed
    /// environment variables.
    pub fn load(path: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix("CRM"))
            .build()?
            .try_deserialize()
    }
}
