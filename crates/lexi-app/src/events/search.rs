use lexi_core::entry::DictionaryEntry;
use lexi_core::error::LookupError;
use lexi_core::storage::KeyValueStore;
use lexi_core::types::{AppEvent, UiEvent};
use lexi_core::view::{PendingLookup, RequestToken};

use crate::events::Session;

/// Starts a lookup and lets it report back through the session inbox
pub async fn handle_search<S: KeyValueStore>(
    session: &mut Session<S>,
    event: UiEvent,
) -> anyhow::Result<()> {
    let pending = match &event {
        UiEvent::Search(text) => session.view.begin_search(text),
        UiEvent::SearchSaved(word) => session.view.select_saved(word),
        _ => None,
    };

    let Some(PendingLookup { token, query }) = pending else {
        tracing::debug!("Ignoring blank search");
        return Ok(());
    };

    session.render().await?;

    tracing::info!("Looking up '{}' (#{})", query, token.get());
    let client = session.client.clone();
    let inbox = session.inbox_tx.clone();
    tokio::spawn(async move {
        let outcome = client.lookup(&query).await;
        let event = AppEvent::LookupFinished {
            token,
            query: query.into_inner(),
            outcome,
        };

        if let Err(e) = inbox.send(event).await {
            tracing::error!("Failed to report lookup result: {}", e);
        }
    });

    Ok(())
}

pub async fn handle_lookup_finished<S: KeyValueStore>(
    session: &mut Session<S>,
    token: RequestToken,
    query: &str,
    outcome: Result<DictionaryEntry, LookupError>,
) -> anyhow::Result<()> {
    if session.view.finish_search(token, outcome) {
        session.render().await?;
    } else {
        tracing::debug!("Dropped stale result for '{}' (#{})", query, token.get());
    }

    Ok(())
}
