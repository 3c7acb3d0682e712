use std::mem;

use crate::entry::DictionaryEntry;
use crate::error::LookupError;
use crate::preprocess::Query;
use crate::render::EntryView;
use crate::saved::SavedWordList;
use crate::saved_view::SavedListView;
use crate::storage::{KeyValueStore, PersistenceStore};

pub const PROMPT_TEXT: &str = "Search for a word to begin...";
pub const SEARCHING_TEXT: &str = "Searching...";
pub const ERROR_GLYPH: &str = "😕";

/// Sequence number of an issued lookup; only the latest may touch the view
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn get(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Message,
    Content,
    SavedList,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageTone {
    Prompt,
    Progress,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub tone: MessageTone,
    pub text: String,
}

impl Message {
    pub fn prompt() -> Self {
        Self {
            tone: MessageTone::Prompt,
            text: PROMPT_TEXT.to_string(),
        }
    }

    pub fn searching() -> Self {
        Self {
            tone: MessageTone::Progress,
            text: SEARCHING_TEXT.to_string(),
        }
    }

    pub fn error(err: &LookupError) -> Self {
        Self {
            tone: MessageTone::Error,
            text: format!("{ERROR_GLYPH}\n{err}."),
        }
    }
}

/// The one visible panel and what it shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelView {
    Message(Message),
    Content(EntryView),
    SavedList(SavedListView),
}

impl PanelView {
    pub fn panel(&self) -> Panel {
        match self {
            PanelView::Message(_) => Panel::Message,
            PanelView::Content(_) => Panel::Content,
            PanelView::SavedList(_) => Panel::SavedList,
        }
    }
}

/// Complete description of what the user currently sees
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    /// Contents of the search box
    pub query: String,
    pub panel: PanelView,
}

impl Default for Screen {
    fn default() -> Self {
        Self {
            query: String::new(),
            panel: PanelView::Message(Message::prompt()),
        }
    }
}

/// A lookup the caller must now perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingLookup {
    pub token: RequestToken,
    pub query: Query,
}

/// Owns the saved words and decides which panel is visible
pub struct ViewController<S> {
    store: PersistenceStore<S>,
    saved: SavedWordList,
    screen: Screen,
    next_token: u64,
    pending: Option<RequestToken>,
    max_synonyms: usize,
}

impl<S: KeyValueStore> ViewController<S> {
    pub fn new(store: PersistenceStore<S>, max_synonyms: usize) -> Self {
        let saved = store.load();

        Self {
            store,
            saved,
            screen: Screen::default(),
            next_token: 0,
            pending: None,
            max_synonyms,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn saved(&self) -> &SavedWordList {
        &self.saved
    }

    pub fn store(&self) -> &PersistenceStore<S> {
        &self.store
    }

    /// Whether the latest issued lookup is still unresolved
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Starts a lookup for `input`, or does nothing at all if it is blank
    pub fn begin_search(&mut self, input: &str) -> Option<PendingLookup> {
        let query = Query::parse(input)?;

        let token = RequestToken(self.next_token);
        self.next_token += 1;
        self.pending = Some(token);

        self.screen.query = query.to_string();
        self.show(PanelView::Message(Message::searching()));

        tracing::debug!("Lookup #{} issued for '{}'", token.get(), query);
        Some(PendingLookup { token, query })
    }

    /// Clicking a saved word searches exactly that word
    pub fn select_saved(&mut self, word: &str) -> Option<PendingLookup> {
        self.begin_search(word)
    }

    /// Applies a lookup outcome; returns false when it was stale and dropped
    pub fn finish_search(
        &mut self,
        token: RequestToken,
        outcome: Result<DictionaryEntry, LookupError>,
    ) -> bool {
        if self.pending != Some(token) {
            tracing::debug!("Discarding stale lookup #{}", token.get());
            return false;
        }
        self.pending = None;

        let rendered = outcome
            .and_then(|entry| EntryView::project(&entry, &self.saved, self.max_synonyms));

        match rendered {
            Ok(view) => self.show(PanelView::Content(view)),
            Err(err) => {
                tracing::info!("Lookup #{} failed: {}", token.get(), err);
                self.show(PanelView::Message(Message::error(&err)));
            }
        }

        true
    }

    /// Saves or unsaves the displayed word; `None` outside the content panel
    pub fn toggle_save(&mut self) -> Option<bool> {
        let word = match &self.screen.panel {
            PanelView::Content(view) => view.word.clone(),
            _ => return None,
        };

        let (list, now_saved) = mem::take(&mut self.saved).toggle(&word);
        self.saved = list;
        self.persist();

        if let PanelView::Content(view) = &mut self.screen.panel {
            view.saved = now_saved;
        }

        tracing::info!("'{}' {}", word, if now_saved { "saved" } else { "unsaved" });
        Some(now_saved)
    }

    pub fn show_saved(&mut self) {
        self.pending = None;
        self.show(PanelView::SavedList(SavedListView::project(&self.saved)));
    }

    /// Removes `word` and redraws the saved list in place
    pub fn delete_saved(&mut self, word: &str) {
        self.saved = mem::take(&mut self.saved).remove(word);
        self.persist();
        self.show_saved();
    }

    pub fn go_home(&mut self) {
        self.pending = None;
        self.show(PanelView::Message(Message::prompt()));
    }

    fn show(&mut self, panel: PanelView) {
        self.screen.panel = panel;
    }

    fn persist(&self) {
        if let Err(e) = self.store.save(&self.saved) {
            tracing::error!("Failed to persist saved words: {}", e);
        }
    }
}
