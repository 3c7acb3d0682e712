use crate::entry::DictionaryEntry;
use crate::error::LookupError;
use crate::view::{RequestToken, Screen};

#[derive(Debug, Clone)]
pub enum AppEvent {
    UiEvent(UiEvent),
    /// A spawned lookup resolved, successfully or not
    LookupFinished {
        token: RequestToken,
        query: String,
        outcome: Result<DictionaryEntry, LookupError>,
    },
    Render(Screen),
    /// The event loop stopped; nothing follows
    Closed,
}

/// Things the user can do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Search(String),
    /// Clicked a word in the saved list
    SearchSaved(String),
    DeleteSaved(String),
    ToggleSave,
    ShowSaved,
    Home,
    Close,
}
