use crate::entry::DictionaryEntry;
use crate::error::LookupError;
use crate::saved::SavedWordList;

/// Everything the content panel shows for one entry
///
/// `None` on an optional field means the matching element is hidden,
/// which is different from showing it blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryView {
    pub word: String,
    pub part_of_speech: String,
    pub phonetic: String,
    pub definition: String,
    pub example: String,
    pub synonyms: Option<String>,
    /// Pronunciation source bound to the play control
    pub audio: Option<String>,
    pub saved: bool,
}

impl EntryView {
    /// Projects the first meaning and first definition of `entry`
    pub fn project(
        entry: &DictionaryEntry,
        saved: &SavedWordList,
        max_synonyms: usize,
    ) -> Result<Self, LookupError> {
        let meaning = entry
            .meanings
            .first()
            .ok_or_else(|| LookupError::MalformedEntry {
                word: entry.word.clone(),
                missing: "meanings",
            })?;
        let definition = meaning
            .definitions
            .first()
            .ok_or_else(|| LookupError::MalformedEntry {
                word: entry.word.clone(),
                missing: "definitions",
            })?;

        let synonyms = (!meaning.synonyms.is_empty() && max_synonyms > 0).then(|| {
            meaning
                .synonyms
                .iter()
                .take(max_synonyms)
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        });

        Ok(Self {
            word: entry.word.clone(),
            part_of_speech: meaning.part_of_speech.clone(),
            phonetic: entry.phonetic_text().to_string(),
            definition: definition.definition.clone(),
            example: definition.example.clone().unwrap_or_default(),
            synonyms,
            audio: entry.audio_url().map(str::to_string),
            saved: saved.contains(&entry.word),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::{Definition, Meaning, Phonetic};

    fn happy() -> DictionaryEntry {
        DictionaryEntry {
            word: "happy".into(),
            phonetic: None,
            phonetics: vec![
                Phonetic {
                    text: Some("/ˈhæpi/".into()),
                    audio: Some(String::new()),
                },
                Phonetic {
                    text: Some(String::new()),
                    audio: Some("https://x/happy.mp3".into()),
                },
            ],
            meanings: vec![Meaning {
                part_of_speech: "adjective".into(),
                definitions: vec![Definition {
                    definition: "feeling joy".into(),
                    example: Some("she felt happy".into()),
                }],
                synonyms: ["glad", "joyful", "cheerful", "content", "merry", "elated"]
                    .map(String::from)
                    .to_vec(),
            }],
        }
    }

    #[test]
    fn projects_the_first_meaning() {
        let view = EntryView::project(&happy(), &SavedWordList::new(), 5).expect("view");

        assert_eq!(
            view,
            EntryView {
                word: "happy".into(),
                part_of_speech: "adjective".into(),
                phonetic: "/ˈhæpi/".into(),
                definition: "feeling joy".into(),
                example: "she felt happy".into(),
                synonyms: Some("glad, joyful, cheerful, content, merry".into()),
                audio: Some("https://x/happy.mp3".into()),
                saved: false,
            }
        );
    }

    #[test]
    fn saved_marker_follows_the_list() {
        let saved = SavedWordList::new().add("happy");
        let view = EntryView::project(&happy(), &saved, 5).expect("view");
        assert!(view.saved);
    }

    #[test]
    fn missing_optional_parts_hide_or_blank() {
        let mut entry = happy();
        entry.phonetics.clear();
        entry.meanings[0].synonyms.clear();
        entry.meanings[0].definitions[0].example = None;

        let view = EntryView::project(&entry, &SavedWordList::new(), 5).expect("view");

        assert_eq!(view.phonetic, "");
        assert_eq!(view.example, "");
        assert_eq!(view.synonyms, None);
        assert_eq!(view.audio, None);
    }

    #[test]
    fn entry_level_phonetic_wins() {
        let mut entry = happy();
        entry.phonetic = Some("/ˈhapi/".into());

        let view = EntryView::project(&entry, &SavedWordList::new(), 5).expect("view");
        assert_eq!(view.phonetic, "/ˈhapi/");
    }

    #[test]
    fn fewer_synonyms_than_the_limit_are_all_shown() {
        let mut entry = happy();
        entry.meanings[0].synonyms.truncate(2);

        let view = EntryView::project(&entry, &SavedWordList::new(), 5).expect("view");
        assert_eq!(view.synonyms.as_deref(), Some("glad, joyful"));
    }

    #[test]
    fn empty_meanings_is_malformed() {
        let mut entry = happy();
        entry.meanings.clear();

        let err = EntryView::project(&entry, &SavedWordList::new(), 5).unwrap_err();
        assert_eq!(
            err,
            LookupError::MalformedEntry {
                word: "happy".into(),
                missing: "meanings"
            }
        );
    }

    #[test]
    fn empty_definitions_is_malformed() {
        let mut entry = happy();
        entry.meanings[0].definitions.clear();

        let err = EntryView::project(&entry, &SavedWordList::new(), 5).unwrap_err();
        assert!(matches!(
            err,
            LookupError::MalformedEntry {
                missing: "definitions",
                ..
            }
        ));
    }
}
