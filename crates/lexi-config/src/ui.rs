use serde::{Deserialize, Serialize};

fn default_max_synonyms() -> usize {
    5
}

fn default_show_prompt() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// How many synonyms the content panel lists
    #[serde(default = "default_max_synonyms")]
    pub max_synonyms: usize,
    /// Print an input prompt when attached to a terminal
    #[serde(default = "default_show_prompt")]
    pub show_prompt: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            max_synonyms: default_max_synonyms(),
            show_prompt: default_show_prompt(),
        }
    }
}
