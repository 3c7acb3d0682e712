/// The two ways a lookup can fail to produce something renderable
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// Unknown word, unreachable service, bad status or bad body
    #[error("Couldn't find \"{0}\"")]
    NotFound(String),

    #[error("Entry for \"{word}\" has no {missing}")]
    MalformedEntry { word: String, missing: &'static str },
}

impl LookupError {
    /// The word the failed lookup was about
    pub fn word(&self) -> &str {
        match self {
            LookupError::NotFound(word) => word,
            LookupError::MalformedEntry { word, .. } => word,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Storage file is not a key/value object")]
    NotAnObject,
}
