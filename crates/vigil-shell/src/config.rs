//! Shell configuration

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Path the shell opens on startup
    pub homepage: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            homepage: "/".to_string(),
        }
    }
}
