mod free_dictionary;

pub use free_dictionary::{FreeDictionaryClient, parse_first_entry};

use lexi_core::entry::DictionaryEntry;
use lexi_core::error::LookupError;
use lexi_core::preprocess::Query;

/// Remote dictionary lookup
#[async_trait::async_trait]
pub trait DictionaryClient: Send + Sync {
    /// One fresh request per call, every failure reads as `NotFound`
    async fn lookup(&self, query: &Query) -> Result<DictionaryEntry, LookupError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Invalid endpoint {url}: {reason}")]
    InvalidEndpoint { url: String, reason: String },

    #[error("HTTP client error: {0}")]
    Build(#[from] reqwest::Error),
}

/// Why a fetch failed, kept for logs only
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("Empty entry list")]
    EmptyResponse,

    #[error("Unexpected response shape: {0}")]
    Shape(#[from] serde_json::Error),
}
