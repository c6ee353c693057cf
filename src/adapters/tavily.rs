//! Tavily web-search adapter.
//!
//! Endpoint: POST {base_url}/search
//! Auth: Bearer token

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::SearchAdapter;
use crate::core::error::RetrievalError;
use crate::domain::SearchHit;

pub const DEFAULT_BASE_URL: &str = "https://api.tavily.com";

/// Tavily search client
pub struct TavilyAdapter {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

/// Request body for /search
#[derive(Debug, Serialize)]
struct SearchRequest<'a> {
    query: &'a str,
    max_results: usize,
    search_depth: &'static str,
}

/// Response from /search
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchHit>,
}

impl TavilyAdapter {
    /// Create a client against the public Tavily API
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Create a client against a custom endpoint
    pub fn with_base_url(api_key: String, base_url: impl Into<String>) -> Self {
        Self {
            api_key,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn search_url(&self) -> String {
        format!("{}/search", self.base_url)
    }
}

/// Map a non-success HTTP status to a retrieval error
fn status_error(status: StatusCode, body: String) -> RetrievalError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => RetrievalError::Authentication(body),
        StatusCode::TOO_MANY_REQUESTS => RetrievalError::RateLimit(body),
        _ => RetrievalError::Provider {
            status: status.as_u16(),
            body,
        },
    }
}

fn parse_response(body: &str) -> Result<Vec<SearchHit>, RetrievalError> {
    let response: SearchResponse =
        serde_json::from_str(body).map_err(|e| RetrievalError::Decode(e.to_string()))?;
    Ok(response.results)
}

#[async_trait]
impl SearchAdapter for TavilyAdapter {
    fn name(&self) -> &str {
        "tavily"
    }

    #[instrument(skip(self), fields(adapter = "tavily"))]
    async fn search(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<SearchHit>, RetrievalError> {
        let request = SearchRequest {
            query,
            max_results,
            search_depth: "basic",
        };

        let response = self
            .client
            .post(self.search_url())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| RetrievalError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| RetrievalError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(status_error(status, body));
        }

        let mut hits = parse_response(&body)?;
        hits.truncate(max_results);
        debug!(hits = hits.len(), "Search completed");

        Ok(hits)
    }
}
