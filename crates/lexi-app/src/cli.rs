use std::path::PathBuf;

use clap::Parser;
use lexi_config::Config;

/// Look up English words and keep a list of the ones worth remembering
#[derive(Debug, Parser)]
#[command(name = "lexi", version, about)]
pub struct Args {
    /// Word to look up right away
    pub word: Option<String>,

    /// Profile to load settings from
    #[arg(long, default_value = "main", env = "LEXI_PROFILE")]
    pub profile: String,

    /// Storage file holding the saved words
    #[arg(long)]
    pub storage: Option<PathBuf>,

    /// Dictionary endpoint, the word is appended to it
    #[arg(long)]
    pub api_url: Option<String>,

    /// Log as JSON lines
    #[arg(long)]
    pub log_json: bool,
}

impl Args {
    /// Command line flags win over the profile
    pub fn apply(&self, config: &mut Config) {
        if let Some(path) = &self.storage {
            config.storage.path = Some(path.clone());
        }
        if let Some(url) = &self.api_url {
            config.network.api_url = url.clone();
        }
        if self.log_json {
            config.logging.json = true;
        }
    }
}
