//! Local session persistence configuration.

use serde::{Deserialize, Serialize};

/// Settings for the on-disk session store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Path to the session file. When unset, the store falls back to
    /// `star4ce/session.json` under the user configuration directory.
    #[serde(default)]
    pub file: Option<String>,
}
