use async_trait::async_trait;
use lexi_core::entry::DictionaryEntry;
use lexi_core::error::LookupError;
use lexi_core::preprocess::Query;
use reqwest::{StatusCode, Url};

use crate::{ClientError, DictionaryClient, FetchError};

/// Client for dictionaryapi.dev style endpoints: `GET {endpoint}/{word}`
#[derive(Clone)]
pub struct FreeDictionaryClient {
    client: reqwest::Client,
    endpoint: Url,
}

impl FreeDictionaryClient {
    pub fn new(endpoint: &str, user_agent: &str) -> Result<Self, ClientError> {
        let invalid = |reason: String| ClientError::InvalidEndpoint {
            url: endpoint.to_string(),
            reason,
        };

        let endpoint = Url::parse(endpoint).map_err(|e| invalid(e.to_string()))?;
        if endpoint.cannot_be_a_base() {
            return Err(invalid("not a base URL".to_string()));
        }

        let client = reqwest::Client::builder().user_agent(user_agent).build()?;

        Ok(Self { client, endpoint })
    }

    /// Endpoint with `word` appended as a single encoded path segment
    pub fn entry_url(&self, word: &str) -> Url {
        let mut url = self.endpoint.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(word);
        }
        url
    }

    async fn fetch(&self, word: &str) -> Result<DictionaryEntry, FetchError> {
        let url = self.entry_url(word);
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.bytes().await?;
        parse_first_entry(&body)
    }
}

#[async_trait]
impl DictionaryClient for FreeDictionaryClient {
    async fn lookup(&self, query: &Query) -> Result<DictionaryEntry, LookupError> {
        match self.fetch(query.as_str()).await {
            Ok(entry) => {
                tracing::debug!(
                    "Found '{}' with {} meanings",
                    entry.word,
                    entry.meanings.len()
                );
                Ok(entry)
            }
            Err(FetchError::Status(StatusCode::NOT_FOUND)) => {
                tracing::info!("No entry for '{}'", query);
                Err(LookupError::NotFound(query.to_string()))
            }
            Err(e) => {
                tracing::warn!("Lookup for '{}' failed: {}", query, e);
                Err(LookupError::NotFound(query.to_string()))
            }
        }
    }
}

/// Takes the first element of the JSON array the API answers with
pub fn parse_first_entry(body: &[u8]) -> Result<DictionaryEntry, FetchError> {
    let mut items: Vec<serde_json::Value> = serde_json::from_slice(body)?;

    if items.is_empty() {
        return Err(FetchError::EmptyResponse);
    }

    Ok(serde_json::from_value(items.swap_remove(0))?)
}
