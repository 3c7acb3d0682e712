use serde::{Deserialize, Serialize};

/// Words the user chose to keep, in the order they were saved
///
/// Membership is what matters: a word appears at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SavedWordList {
    words: Vec<String>,
}

impl SavedWordList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    /// Appends `word` unless it is already saved
    #[must_use]
    pub fn add(mut self, word: &str) -> Self {
        if !self.contains(word) {
            self.words.push(word.to_string());
        }
        self
    }

    #[must_use]
    pub fn remove(mut self, word: &str) -> Self {
        self.words.retain(|w| w != word);
        self
    }

    /// Flips membership of `word`, returning whether it is now saved
    #[must_use]
    pub fn toggle(self, word: &str) -> (Self, bool) {
        if self.contains(word) {
            (self.remove(word), false)
        } else {
            (self.add(word), true)
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Drops repeated words, keeping the first occurrence
    pub(crate) fn dedup(self) -> Self {
        self.words
            .into_iter()
            .fold(Self::new(), |list, word| list.add(&word))
    }
}

impl<S: AsRef<str>> FromIterator<S> for SavedWordList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |list, word| list.add(word.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_is_idempotent() {
        let list: SavedWordList = ["dog"].into_iter().collect();

        let once = list.clone().add("cat");
        let twice = list.add("cat").add("cat");

        assert_eq!(once, twice);
        assert_eq!(once.len(), 2);
    }

    #[test]
    fn remove_is_idempotent() {
        let list: SavedWordList = ["dog", "cat"].into_iter().collect();

        let once = list.clone().remove("cat");
        let twice = list.remove("cat").remove("cat");

        assert_eq!(once, twice);
        assert!(!once.contains("cat"));
        assert!(once.contains("dog"));
    }

    #[test]
    fn remove_of_absent_word_is_a_no_op() {
        let list: SavedWordList = ["dog"].into_iter().collect();
        assert_eq!(list.clone().remove("cat"), list);
    }

    #[test]
    fn insertion_order_is_kept() {
        let list = SavedWordList::new()
            .add("zebra")
            .add("apple")
            .add("mango")
            .remove("apple")
            .add("apple");

        assert_eq!(list.iter().collect::<Vec<_>>(), ["zebra", "mango", "apple"]);
    }

    #[test]
    fn toggle_flips_membership() {
        let (list, saved) = SavedWordList::new().toggle("happy");
        assert!(saved);
        assert!(list.contains("happy"));

        let (list, saved) = list.toggle("happy");
        assert!(!saved);
        assert!(list.is_empty());
    }

    #[test]
    fn membership_is_case_sensitive() {
        let list = SavedWordList::new().add("Polish");
        assert!(!list.contains("polish"));
    }

    #[test]
    fn serializes_as_plain_array() {
        let list: SavedWordList = ["a", "b"].into_iter().collect();
        assert_eq!(serde_json::to_string(&list).expect("json"), r#"["a","b"]"#);
    }

    #[test]
    fn dedup_keeps_first_occurrence() {
        let list: SavedWordList = serde_json::from_str(r#"["b","a","b"]"#).expect("json");
        assert_eq!(list.dedup().iter().collect::<Vec<_>>(), ["b", "a"]);
    }
}
