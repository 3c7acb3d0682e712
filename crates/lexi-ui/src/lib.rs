use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use lexi_config::Config;
use lexi_core::types::{AppEvent, UiEvent};
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;

pub mod bridge;
pub mod command;
pub mod events;
pub mod present;
pub mod state;

use command::{Command, HELP};
use events::{UiUpdate, handle_events};
use state::UiState;

const PROMPT: &str = "search> ";

/// Terminal front end on stdin/stdout
pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    config: Arc<RwLock<Config>>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let (show_prompt, capacity) = {
        let config = config.read().await;
        (
            config.ui.show_prompt && atty::is(atty::Stream::Stdin),
            config.channel_capacity,
        )
    };

    run_terminal(
        bridge::stdin_lines(capacity),
        tokio::io::stdout(),
        app_to_ui_rx,
        ui_to_app_tx,
        show_prompt,
        cancel,
    )
    .await
}

/// Reads command lines from `input` and draws screens to `output` until the app closes
pub async fn run_terminal<W>(
    input: AsyncReceiver<String>,
    mut output: W,
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    show_prompt: bool,
    cancel: CancellationToken,
) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let mut state = UiState::new();
    let mut input_open = true;

    tracing::info!("[UI] Terminal ready");
    loop {
        tokio::select! {
            event = app_to_ui_rx.recv() => {
                let Ok(event) = event else {
                    tracing::warn!("[UI] App channel closed");
                    break;
                };

                match handle_events(event, &mut state) {
                    UiUpdate::Draw(text) => {
                        output.write_all(text.as_bytes()).await?;
                        if show_prompt && input_open {
                            output.write_all(PROMPT.as_bytes()).await?;
                        }
                        output.flush().await?;
                    }
                    UiUpdate::Stop => break,
                    UiUpdate::Nothing => {}
                }
            }
            line = input.recv(), if input_open => {
                let Ok(line) = line else {
                    tracing::debug!("[UI] Input ended");
                    input_open = false;
                    ui_to_app_tx.send(AppEvent::UiEvent(UiEvent::Close)).await?;
                    continue;
                };

                let reply = match command::parse(&line) {
                    Command::Ui(event) => {
                        ui_to_app_tx.send(AppEvent::UiEvent(event)).await?;
                        None
                    }
                    Command::OpenSaved(n) => forward(&ui_to_app_tx, state.saved_select(n), n).await?,
                    Command::DeleteSaved(n) => forward(&ui_to_app_tx, state.saved_delete(n), n).await?,
                    Command::PlayAudio => Some(match state.audio() {
                        Some(url) => format!("♪ {url}\n"),
                        None => "No pronunciation for this entry.\n".to_string(),
                    }),
                    Command::Help => Some(format!("{HELP}\n")),
                    Command::Quit => {
                        input_open = false;
                        ui_to_app_tx.send(AppEvent::UiEvent(UiEvent::Close)).await?;
                        None
                    }
                    Command::Unknown(text) => {
                        Some(format!("Unknown command '{text}', :help lists commands.\n"))
                    }
                };

                if let Some(reply) = reply {
                    output.write_all(reply.as_bytes()).await?;
                    if show_prompt && input_open {
                        output.write_all(PROMPT.as_bytes()).await?;
                    }
                    output.flush().await?;
                }
            }
            _ = cancel.cancelled() => {
                tracing::info!("[UI] Cancelled");
                break;
            }
        }
    }

    output.flush().await?;
    Ok(())
}

/// Sends a saved-row action, or explains why there is none
async fn forward(
    tx: &AsyncSender<AppEvent>,
    event: Option<UiEvent>,
    n: usize,
) -> anyhow::Result<Option<String>> {
    match event {
        Some(event) => {
            tx.send(AppEvent::UiEvent(event)).await?;
            Ok(None)
        }
        None => Ok(Some(format!("No saved word {n} on screen, :list shows them.\n"))),
    }
}
