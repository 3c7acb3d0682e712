use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use lexi_config::Config;
use lexi_core::types::AppEvent;
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;

pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    config: Arc<RwLock<Config>>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    lexi_ui::ui_loop(app_to_ui_rx, ui_to_app_tx, config, cancel).await
}
