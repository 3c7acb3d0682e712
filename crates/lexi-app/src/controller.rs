use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use lexi_client::DictionaryClient;
use lexi_core::storage::KeyValueStore;
use lexi_core::types::AppEvent;
use lexi_core::view::ViewController;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::events::{Session, event_loop};
use crate::state::AppState;
use crate::ui::ui_loop;

/// Centralized channel management
pub struct ChannelSet {
    /// Unbounded so the event loop never waits on the UI while it holds input
    pub app_to_ui: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
    /// UI interactions and lookup results share this inbox
    pub ui_to_app: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new(capacity: usize) -> Self {
        Self {
            app_to_ui: kanal::unbounded_async(),
            ui_to_app: kanal::bounded_async(capacity),
        }
    }
}

/// Runs the event loop, then tells the UI nothing else is coming
pub async fn run_event_loop<S: KeyValueStore>(
    session: Session<S>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
    initial_query: Option<String>,
) -> anyhow::Result<()> {
    let result = event_loop(session, ui_to_app_rx, cancel, initial_query).await;
    // The UI stops once it has drawn everything before this
    let _ = app_to_ui_tx.send(AppEvent::Closed).await;
    result
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>, capacity: usize) -> Self {
        Self {
            channels: ChannelSet::new(capacity),
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    pub fn spawn_tasks<S>(
        &self,
        view: ViewController<S>,
        client: Arc<dyn DictionaryClient>,
        initial_query: Option<String>,
    ) -> JoinSet<anyhow::Result<()>>
    where
        S: KeyValueStore + 'static,
    {
        let mut tasks = JoinSet::new();

        // Event loop
        let session = Session::new(
            view,
            client,
            self.channels.ui_to_app.0.clone(),
            self.channels.app_to_ui.0.clone(),
        );
        tasks.spawn(run_event_loop(
            session,
            self.channels.ui_to_app.1.clone(),
            self.channels.app_to_ui.0.clone(),
            self.cancel_token.clone(),
            initial_query,
        ));

        // UI loop
        tasks.spawn(ui_loop(
            self.channels.app_to_ui.1.clone(),
            self.channels.ui_to_app.0.clone(),
            self.state.config.clone(),
            self.cancel_token.child_token(),
        ));

        tasks
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
