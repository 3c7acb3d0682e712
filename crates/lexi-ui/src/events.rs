use lexi_core::types::AppEvent;

use crate::present::present;
use crate::state::UiState;

/// What the terminal should do after an event from the app
#[derive(Debug, PartialEq, Eq)]
pub enum UiUpdate {
    Draw(String),
    Stop,
    Nothing,
}

pub fn handle_events(event: AppEvent, state: &mut UiState) -> UiUpdate {
    match event {
        AppEvent::Render(screen) => {
            tracing::debug!("[UI] Rendering {:?} panel", screen.panel.panel());
            state.screen = screen;
            UiUpdate::Draw(present(&state.screen))
        }
        AppEvent::Closed => {
            tracing::debug!("[UI] App closed");
            UiUpdate::Stop
        }
        AppEvent::UiEvent(_) | AppEvent::LookupFinished { .. } => UiUpdate::Nothing,
    }
}
