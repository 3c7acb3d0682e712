use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use directories::ProjectDirs;
use lexi_config::Config;
use serde::{Deserialize, Serialize};

const STORAGE_FILE: &str = "storage.json";

fn project_dirs() -> anyhow::Result<ProjectDirs> {
    ProjectDirs::from("dev", "lexi", "lexi").context("No home directory to keep lexi's files in")
}

/// Platform config directory, e.g. `~/.config/lexi`
pub fn lexi_root() -> anyhow::Result<PathBuf> {
    Ok(project_dirs()?.config_dir().to_path_buf())
}

fn profiles_dir(root: &Path) -> PathBuf {
    root.join("profiles")
}

/// Represents a user profile
#[derive(Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub value: Config,
}

fn read_profile(path: &Path) -> anyhow::Result<Config> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read profile {}", path.display()))?;
    let profile: Profile = serde_json::from_str(&data)
        .with_context(|| format!("Failed to parse profile {}", path.display()))?;
    Ok(profile.value)
}

/// Create the profiles folder and a `main` profile from defaults if missing
pub fn init_user_config(root: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(profiles_dir(root))?;

    let main_profile = profiles_dir(root).join("main.json");

    if !main_profile.exists() {
        let profile = Profile {
            name: "main".into(),
            value: Config::default(),
        };
        fs::write(&main_profile, serde_json::to_string_pretty(&profile)?)?;
        tracing::info!("Created main profile at {}", main_profile.display());
    }

    Ok(())
}

/// Load a user profile by name, falling back to main, then to defaults
pub fn load_user_profile(root: &Path, name: &str) -> anyhow::Result<Config> {
    let profile_file = profiles_dir(root).join(format!("{name}.json"));

    if profile_file.exists() {
        return read_profile(&profile_file);
    }

    tracing::warn!("Profile {name} not found, falling back to main profile or defaults");
    let main_file = profiles_dir(root).join("main.json");
    if main_file.exists() {
        read_profile(&main_file)
    } else {
        Ok(Config::new())
    }
}

/// Where the saved words live: configured path, else the platform data dir
pub fn storage_path(config: &Config) -> anyhow::Result<PathBuf> {
    match &config.storage.path {
        Some(path) => Ok(path.clone()),
        None => Ok(project_dirs()?.data_dir().join(STORAGE_FILE)),
    }
}
