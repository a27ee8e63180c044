//! Client configuration model.

use serde::{Deserialize, Serialize};

/// Origin of the remote menu service when no configuration overrides it.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Default number of history entries requested by the dashboard.
pub const DEFAULT_HISTORY_LIMIT: usize = 10;

/// Contents of `config.toml`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Base origin of the remote service, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// How many menu-history entries the dashboard requests.
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_history_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            history_limit: default_history_limit(),
        }
    }
}
