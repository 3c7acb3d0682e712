use std::sync::Arc;

use clap::Parser;
use lexi_client::{DictionaryClient, FreeDictionaryClient};
use lexi_core::storage::{FileStore, PersistenceStore};
use lexi_core::view::ViewController;
use tokio::signal;

mod cli;
mod controller;
mod events;
mod logging;
mod profile;
mod state;
mod ui;


use self::cli::Args;
use self::controller::AppController;
use self::profile::{init_user_config, lexi_root, load_user_profile, storage_path};
use self::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let root = lexi_root()?;
    init_user_config(&root)?;
    let mut config = load_user_profile(&root, &args.profile)?;
    config.apply_env();
    args.apply(&mut config);

    logging::init(&config.logging)?;
    tracing::info!("Using profile '{}' from {}", args.profile, root.display());

    let file = FileStore::new(storage_path(&config)?);
    tracing::info!("Saved words at {}", file.path().display());
    let store = PersistenceStore::new(file, config.storage.key.clone());
    let view = ViewController::new(store, config.ui.max_synonyms);

    let client: Arc<dyn DictionaryClient> = Arc::new(FreeDictionaryClient::new(
        &config.network.api_url,
        &config.network.user_agent,
    )?);

    let capacity = config.channel_capacity;
    let state = Arc::new(AppState::new(config));
    let controller = AppController::new(state, capacity);
    let mut tasks = controller.spawn_tasks(view, client, args.word.clone());

    loop {
        tokio::select! {
            _ = signal::ctrl_c() => {
                tracing::info!("Shutdown requested");
                controller.shutdown();
            }
            result = tasks.join_next() => {
                match result {
                    Some(Ok(Ok(()))) => tracing::debug!("Task finished"),
                    Some(Ok(Err(e))) => {
                        tracing::error!("Task failed: {e:#}");
                        controller.shutdown();
                    }
                    Some(Err(e)) => {
                        tracing::error!("Task panicked: {e}");
                        controller.shutdown();
                    }
                    None => break,
                }
            }
        }
    }

    tracing::info!("Bye");
    Ok(())
}
