use crate::saved::SavedWordList;
use crate::types::UiEvent;

pub const EMPTY_PLACEHOLDER: &str = "No saved words yet.";

/// One row of the saved list with the actions its two controls trigger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedRow {
    pub word: String,
    pub select: UiEvent,
    pub delete: UiEvent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SavedListView {
    /// Placeholder row only, nothing clickable
    Empty,
    Rows(Vec<SavedRow>),
}

impl SavedListView {
    pub fn project(list: &SavedWordList) -> Self {
        if list.is_empty() {
            return SavedListView::Empty;
        }

        let rows = list
            .iter()
            .map(|word| SavedRow {
                word: word.to_string(),
                select: UiEvent::SearchSaved(word.to_string()),
                delete: UiEvent::DeleteSaved(word.to_string()),
            })
            .collect();

        SavedListView::Rows(rows)
    }

    pub fn rows(&self) -> &[SavedRow] {
        match self {
            SavedListView::Empty => &[],
            SavedListView::Rows(rows) => rows,
        }
    }
}
