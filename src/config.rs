//! Configuration for the remote API collaborator.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the platform API, e.g. `https://api.example.com/v1`.
    pub base_url: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    30
}

impl ApiConfig {
    /// Loads configuration from a YAML file at `path`, with
    /// `ADMIN_CONSOLE_*` environment variables overriding file values.
    pub fn load(path: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix("ADMIN_CONSOLE"))
            .build()?
            .try_deserialize()
    }
}
