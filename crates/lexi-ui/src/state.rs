use lexi_core::saved_view::SavedRow;
use lexi_core::types::UiEvent;
use lexi_core::view::{PanelView, Screen};

/// UI-side copy of the last screen the event loop sent
#[derive(Default)]
pub struct UiState {
    pub screen: Screen,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Event behind the word in saved-list row `n` (1-based)
    pub fn saved_select(&self, n: usize) -> Option<UiEvent> {
        self.saved_row(n).map(|row| row.select.clone())
    }

    pub fn saved_delete(&self, n: usize) -> Option<UiEvent> {
        self.saved_row(n).map(|row| row.delete.clone())
    }

    /// Audio source bound to the content panel, if shown
    pub fn audio(&self) -> Option<&str> {
        match &self.screen.panel {
            PanelView::Content(entry) => entry.audio.as_deref(),
            _ => None,
        }
    }

    fn saved_row(&self, n: usize) -> Option<&SavedRow> {
        match &self.screen.panel {
            PanelView::SavedList(list) => list.rows().get(n.checked_sub(1)?),
            _ => None,
        }
    }
}
