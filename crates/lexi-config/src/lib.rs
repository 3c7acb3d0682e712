use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use self::logging::LoggingConfig;
use self::network::NetworkConfig;
use self::storage::StorageConfig;
use self::ui::UiConfig;

pub mod logging;
pub mod network;
pub mod storage;
pub mod ui;

fn default_channel_capacity() -> usize {
    64
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub network: NetworkConfig,
    pub storage: StorageConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,

    /// Capacity of the bounded channels between the UI and event loops
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
}

impl Config {
    /// Defaults with environment overrides applied
    pub fn new() -> Self {
        let mut config = Config::default();
        config.apply_env();
        config
    }

    /// Overlays whichever `LEXI_*` variables are set
    pub fn apply_env(&mut self) {
        self.apply_vars(|name| env::var(name).ok());
    }

    fn apply_vars(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(url) = var("LEXI_API_URL") {
            self.network.api_url = url;
        }
        if let Some(path) = var("LEXI_STORAGE_PATH") {
            self.storage.path = Some(PathBuf::from(path));
        }
        if let Some(key) = var("LEXI_STORAGE_KEY") {
            self.storage.key = key;
        }
        if let Some(filter) = var("LEXI_LOG") {
            self.logging.filter = filter;
        }
        if let Some(capacity) = var("LEXI_CHANNEL_CAPACITY")
            .and_then(|v| v.parse().ok())
            .filter(|&v: &usize| v > 0)
        {
            self.channel_capacity = capacity;
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            network: NetworkConfig::default(),
            storage: StorageConfig::default(),
            ui: UiConfig::default(),
            logging: LoggingConfig::default(),
            channel_capacity: default_channel_capacity(),
        }
    }
}
