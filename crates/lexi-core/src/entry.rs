use serde::{Deserialize, Deserializer, Serialize};

/// One parsed result from the dictionary API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryEntry {
    pub word: String,
    #[serde(default)]
    pub phonetic: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub phonetics: Vec<Phonetic>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub meanings: Vec<Meaning>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phonetic {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub audio: Option<String>,
}

/// Part-of-speech grouping within an entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meaning {
    pub part_of_speech: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub definitions: Vec<Definition>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub synonyms: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    pub definition: String,
    #[serde(default)]
    pub example: Option<String>,
}

/// The API sends `null` for some empty lists
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

impl DictionaryEntry {
    /// Entry-level phonetic, else the first variant's text, else empty
    pub fn phonetic_text(&self) -> &str {
        match self.phonetic.as_deref() {
            Some(text) if !text.is_empty() => text,
            _ => self
                .phonetics
                .first()
                .and_then(|p| p.text.as_deref())
                .unwrap_or_default(),
        }
    }

    /// First phonetic variant carrying a non-empty audio URL
    pub fn audio_url(&self) -> Option<&str> {
        self.phonetics
            .iter()
            .filter_map(|p| p.audio.as_deref())
            .find(|audio| !audio.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HELLO: &str = r#"{
        "word": "hello",
        "phonetics": [
            { "audio": "https://api.dictionaryapi.dev/media/pronunciations/en/hello-au.mp3", "sourceUrl": "x" },
            { "text": "/həˈləʊ/", "audio": "https://api.dictionaryapi.dev/media/pronunciations/en/hello-uk.mp3" }
        ],
        "meanings": [
            {
                "partOfSpeech": "noun",
                "definitions": [
                    { "definition": "\"Hello!\" or an equivalent greeting.", "synonyms": [], "antonyms": [] }
                ],
                "synonyms": ["greeting"],
                "antonyms": []
            }
        ],
        "license": { "name": "CC BY-SA 3.0", "url": "https://creativecommons.org/licenses/by-sa/3.0" },
        "sourceUrls": ["https://en.wiktionary.org/wiki/hello"]
    }"#;

    #[test]
    fn parses_api_shape_and_ignores_extra_fields() {
        let entry: DictionaryEntry = serde_json::from_str(HELLO).expect("parse");

        assert_eq!(entry.word, "hello");
        assert_eq!(entry.phonetic, None);
        assert_eq!(entry.phonetics.len(), 2);
        assert_eq!(entry.meanings[0].part_of_speech, "noun");
        assert_eq!(entry.meanings[0].definitions[0].example, None);
        assert_eq!(entry.meanings[0].synonyms, vec!["greeting"]);
    }

    #[test]
    fn phonetic_falls_back_to_first_variant_only() {
        let entry: DictionaryEntry = serde_json::from_str(HELLO).expect("parse");

        // The first variant has no text, the second is never consulted.
        assert_eq!(entry.phonetic_text(), "");

        let mut with_blank = entry.clone();
        with_blank.phonetic = Some(String::new());
        with_blank.phonetics[0].text = Some("/hɛˈloʊ/".into());
        assert_eq!(with_blank.phonetic_text(), "/hɛˈloʊ/");

        with_blank.phonetic = Some("/həˈloʊ/".into());
        assert_eq!(with_blank.phonetic_text(), "/həˈloʊ/");
    }

    #[test]
    fn audio_skips_empty_urls() {
        let entry = DictionaryEntry {
            word: "cat".into(),
            phonetic: None,
            phonetics: vec![
                Phonetic {
                    text: Some("/kæt/".into()),
                    audio: Some(String::new()),
                },
                Phonetic {
                    text: None,
                    audio: None,
                },
                Phonetic {
                    text: None,
                    audio: Some("https://x/cat.mp3".into()),
                },
            ],
            meanings: vec![],
        };

        assert_eq!(entry.audio_url(), Some("https://x/cat.mp3"));
    }

    #[test]
    fn null_lists_read_as_empty() {
        let entry: DictionaryEntry = serde_json::from_str(
            r#"{
                "word": "x",
                "phonetics": null,
                "meanings": [
                    { "partOfSpeech": "noun", "definitions": [{ "definition": "d" }], "synonyms": null }
                ]
            }"#,
        )
        .expect("parse");

        assert!(entry.phonetics.is_empty());
        assert_eq!(entry.meanings[0].definitions[0].definition, "d");
        assert!(entry.meanings[0].synonyms.is_empty());
    }

    #[test]
    fn missing_word_is_a_shape_error() {
        let result = serde_json::from_str::<DictionaryEntry>(r#"{ "meanings": [] }"#);
        assert!(result.is_err());
    }
}
