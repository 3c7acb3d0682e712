use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use lexi_client::DictionaryClient;
use lexi_core::storage::KeyValueStore;
use lexi_core::types::{AppEvent, UiEvent};
use lexi_core::view::ViewController;
use tokio_util::sync::CancellationToken;

pub mod saved_words;
pub mod search;

use saved_words::{handle_delete_saved, handle_show_saved, handle_toggle_save};
use search::{handle_lookup_finished, handle_search};

/// Everything the event loop owns
pub struct Session<S> {
    pub view: ViewController<S>,
    pub client: Arc<dyn DictionaryClient>,
    /// Lookup tasks report back through here
    pub inbox_tx: AsyncSender<AppEvent>,
    pub app_to_ui_tx: AsyncSender<AppEvent>,
    closing: bool,
}

impl<S: KeyValueStore> Session<S> {
    pub fn new(
        view: ViewController<S>,
        client: Arc<dyn DictionaryClient>,
        inbox_tx: AsyncSender<AppEvent>,
        app_to_ui_tx: AsyncSender<AppEvent>,
    ) -> Self {
        Self {
            view,
            client,
            inbox_tx,
            app_to_ui_tx,
            closing: false,
        }
    }

    /// Sends the current screen to the UI
    pub async fn render(&self) -> anyhow::Result<()> {
        self.app_to_ui_tx
            .send(AppEvent::Render(self.view.screen().clone()))
            .await?;
        Ok(())
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// App's main loop
pub async fn event_loop<S: KeyValueStore>(
    mut session: Session<S>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    cancel: CancellationToken,
    initial_query: Option<String>,
) -> anyhow::Result<()> {
    session.render().await?;

    if let Some(query) = initial_query {
        handle_search(&mut session, UiEvent::Search(query)).await?;
    }

    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for events");
    loop {
        let event = tokio::select! {
            event = ui_to_app_rx.recv() => event?,
            _ = cancel.cancelled() => {
                tracing::info!("[EVENT_LOOP] Cancelled");
                break;
            }
        };

        tracing::debug!(
            "[EVENT_LOOP] EVENT RECEIVED: {:?}",
            std::mem::discriminant(&event)
        );
        if handle_events(&mut session, event).await? == Flow::Exit {
            break;
        }
    }

    tracing::info!("[EVENT_LOOP] Stopped");
    Ok(())
}

pub async fn handle_events<S: KeyValueStore>(
    session: &mut Session<S>,
    event: AppEvent,
) -> anyhow::Result<Flow> {
    match event {
        AppEvent::UiEvent(event @ (UiEvent::Search(_) | UiEvent::SearchSaved(_))) => {
            handle_search(session, event).await?;
        }
        AppEvent::UiEvent(UiEvent::DeleteSaved(word)) => {
            handle_delete_saved(session, &word).await?;
        }
        AppEvent::UiEvent(UiEvent::ToggleSave) => {
            handle_toggle_save(session).await?;
        }
        AppEvent::UiEvent(UiEvent::ShowSaved) => {
            handle_show_saved(session).await?;
        }
        AppEvent::UiEvent(UiEvent::Home) => {
            session.view.go_home();
            session.render().await?;
        }
        AppEvent::UiEvent(UiEvent::Close) => {
            session.closing = true;
            if session.view.has_pending() {
                tracing::info!("[EVENT_LOOP] Closing after the pending lookup");
            }
        }
        AppEvent::LookupFinished {
            token,
            query,
            outcome,
        } => {
            handle_lookup_finished(session, token, &query, outcome).await?;
        }
        AppEvent::Render(_) | AppEvent::Closed => {
            // UI-only events, ignore in backend
        }
    }

    if session.closing && !session.view.has_pending() {
        return Ok(Flow::Exit);
    }

    Ok(Flow::Continue)
}
