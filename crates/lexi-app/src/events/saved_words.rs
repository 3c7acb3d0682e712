use lexi_core::storage::KeyValueStore;

use crate::events::Session;

pub async fn handle_toggle_save<S: KeyValueStore>(session: &mut Session<S>) -> anyhow::Result<()> {
    match session.view.toggle_save() {
        Some(_) => session.render().await?,
        None => tracing::debug!("Nothing on screen to save"),
    }

    Ok(())
}

pub async fn handle_show_saved<S: KeyValueStore>(session: &mut Session<S>) -> anyhow::Result<()> {
    session.view.show_saved();
    tracing::debug!("Showing {} saved words", session.view.saved().len());
    session.render().await
}

pub async fn handle_delete_saved<S: KeyValueStore>(
    session: &mut Session<S>,
    word: &str,
) -> anyhow::Result<()> {
    session.view.delete_saved(word);
    tracing::info!("Deleted '{}' from saved words", word);
    session.render().await
}
