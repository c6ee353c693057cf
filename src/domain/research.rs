//! Research material gathered from the search service.

use serde::{Deserialize, Serialize};

/// A single result returned by the search service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Page title, when the provider reports one
    #[serde(default)]
    pub title: Option<String>,

    /// Source URL, when the provider reports one
    #[serde(default)]
    pub url: Option<String>,

    /// Text passage relevant to the query
    pub content: String,
}

impl SearchHit {
    /// Create a hit carrying only content
    pub fn from_content(content: impl Into<String>) -> Self {
        Self {
            title: None,
            url: None,
            content: content.into(),
        }
    }
}

/// Ordered research snippets for a topic.
///
/// Order follows the provider's relevance ranking. Snippets are neither
/// deduplicated nor attributed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResearchBundle {
    pub snippets: Vec<String>,
}

impl ResearchBundle {
    pub fn new(snippets: Vec<String>) -> Self {
        Self { snippets }
    }

    /// Collapse the snippets into one newline-separated block
    pub fn joined(&self) -> String {
        self.snippets.join("\n")
    }

    pub fn len(&self) -> usize {
        self.snippets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }

    /// True when at least one snippet carries non-blank text
    pub fn has_usable_content(&self) -> bool {
        self.snippets.iter().any(|s| !s.trim().is_empty())
    }
}

impl FromIterator<SearchHit> for ResearchBundle {
    fn from_iter<I: IntoIterator<Item = SearchHit>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(|hit| hit.content).collect())
    }
}
