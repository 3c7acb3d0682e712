use serde::{Deserialize, Serialize};

pub const DEFAULT_API_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_user_agent() -> String {
    concat!("lexi/", env!("CARGO_PKG_VERSION")).to_string()
}

/// Remote dictionary API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Base endpoint, the word is appended as the last path segment
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            user_agent: default_user_agent(),
        }
    }
}
