use std::fmt::Write;

use lexi_core::render::EntryView;
use lexi_core::saved_view::{EMPTY_PLACEHOLDER, SavedListView};
use lexi_core::view::{Message, MessageTone, PanelView, Screen};

const RULE: &str = "────────────────────────────────────────";

/// Renders the visible panel as terminal text
pub fn present(screen: &Screen) -> String {
    let mut out = String::new();
    out.push_str(RULE);
    out.push('\n');
    if !screen.query.is_empty() {
        let _ = writeln!(out, "  › {}", screen.query);
        let _ = writeln!(out);
    }

    match &screen.panel {
        PanelView::Message(message) => present_message(&mut out, message),
        PanelView::Content(entry) => present_entry(&mut out, entry),
        PanelView::SavedList(list) => present_saved(&mut out, list),
    }

    out.push_str(RULE);
    out.push('\n');
    out
}

fn present_message(out: &mut String, message: &Message) {
    for line in message.text.lines() {
        match message.tone {
            MessageTone::Error => {
                let _ = writeln!(out, "  ! {line}");
            }
            MessageTone::Prompt | MessageTone::Progress => {
                let _ = writeln!(out, "  {line}");
            }
        }
    }
}

fn present_entry(out: &mut String, entry: &EntryView) {
    let marker = if entry.saved { "  ★ saved" } else { "  ☆" };
    let _ = writeln!(out, "  {}{}", entry.word, marker);

    if !entry.phonetic.is_empty() {
        let _ = writeln!(out, "  {}", entry.phonetic);
    }
    let _ = writeln!(out, "  [{}]", entry.part_of_speech);
    let _ = writeln!(out);
    let _ = writeln!(out, "  {}", entry.definition);

    if !entry.example.is_empty() {
        let _ = writeln!(out, "  \"{}\"", entry.example);
    }

    if let Some(synonyms) = &entry.synonyms {
        let _ = writeln!(out);
        let _ = writeln!(out, "  Synonyms: {synonyms}");
    }

    if entry.audio.is_some() {
        let _ = writeln!(out);
        let _ = writeln!(out, "  ♪ pronunciation available (:play)");
    }
}

fn present_saved(out: &mut String, list: &SavedListView) {
    let _ = writeln!(out, "  Saved words");

    match list {
        SavedListView::Empty => {
            let _ = writeln!(out, "  {EMPTY_PLACEHOLDER}");
        }
        SavedListView::Rows(rows) => {
            let width = rows.len().to_string().len();
            for (i, row) in rows.iter().enumerate() {
                let _ = writeln!(out, "  {:>width$}. {}", i + 1, row.word);
            }
            let _ = writeln!(out, "  (:open N to look up, :del N to remove)");
        }
    }
}
