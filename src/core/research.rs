//! Research provider: turns a topic into research snippets.

use std::sync::Arc;

use tracing::{info, instrument};

use super::error::RetrievalError;
use crate::adapters::SearchAdapter;
use crate::domain::{ResearchBundle, Topic};

/// Number of search results requested per topic
pub const MAX_RESULTS: usize = 5;

/// Fetches research for a topic through a search adapter
#[derive(Clone)]
pub struct Researcher {
    adapter: Arc<dyn SearchAdapter>,
}

impl Researcher {
    pub fn new(adapter: Arc<dyn SearchAdapter>) -> Self {
        Self { adapter }
    }

    /// Search for the topic and collect the result contents in rank order.
    ///
    /// Fails with [`RetrievalError::NoResults`] when nothing usable comes
    /// back; research is never fabricated.
    #[instrument(skip(self, topic), fields(topic = %topic, adapter = %self.adapter.name()))]
    pub async fn fetch_research(&self, topic: &Topic) -> Result<ResearchBundle, RetrievalError> {
        let hits = self.adapter.search(topic.as_str(), MAX_RESULTS).await?;
        let bundle: ResearchBundle = hits.into_iter().collect();

        if !bundle.has_usable_content() {
            return Err(RetrievalError::NoResults {
                query: topic.to_string(),
            });
        }

        info!(snippets = bundle.len(), "Research fetched");
        Ok(bundle)
    }
}
