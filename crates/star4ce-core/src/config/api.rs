//! Remote authority configuration.

use serde::{Deserialize, Serialize};

/// Settings for reaching the remote authority (the Star4ce backend).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the remote authority.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Upper bound on a single identity-verification call, in seconds.
    /// A timed-out call is treated as a rejection.
    #[serde(default = "default_verify_timeout")]
    pub verify_timeout_seconds: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            verify_timeout_seconds: default_verify_timeout(),
        }
    }
}

/// Local-development fallback when no base URL is configured.
fn default_base_url() -> String {
    "http://localhost:4000".to_string()
}

fn default_verify_timeout() -> u64 {
    10
}
