//! Adapter interfaces for external services.
//!
//! The pipeline only sees these traits. Concrete backends talk HTTP to a
//! web-search service (Tavily) and a chat-completion service (OpenAI);
//! tests substitute in-memory stubs.

pub mod openai;
pub mod tavily;

use async_trait::async_trait;

use crate::core::error::{GenerationError, RetrievalError};
use crate::domain::SearchHit;

pub use openai::OpenAiAdapter;
pub use tavily::TavilyAdapter;

/// Output from a completion call
#[derive(Debug, Clone)]
pub struct AdapterOutput {
    /// The text returned by the model
    pub content: String,

    /// Tokens used (if the service reports it)
    pub tokens_used: Option<u64>,
}

impl AdapterOutput {
    /// Create a new adapter output with just content
    pub fn new(content: String) -> Self {
        Self {
            content,
            tokens_used: None,
        }
    }
}

/// Web-search service boundary
#[async_trait]
pub trait SearchAdapter: Send + Sync {
    /// Human-readable adapter name
    fn name(&self) -> &str;

    /// Run a search and return at most `max_results` hits, best first
    async fn search(&self, query: &str, max_results: usize)
        -> Result<Vec<SearchHit>, RetrievalError>;
}

/// Language-model service boundary
#[async_trait]
pub trait CompletionAdapter: Send + Sync {
    /// Human-readable adapter name
    fn name(&self) -> &str;

    /// Complete a single prompt
    async fn complete(
        &self,
        prompt: &str,
        temperature: f32,
    ) -> Result<AdapterOutput, GenerationError>;
}
