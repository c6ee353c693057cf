//! Stub service adapters shared by the integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use repurpose::adapters::{AdapterOutput, CompletionAdapter, SearchAdapter};
use repurpose::core::{GenerationError, PromptTemplate, RetrievalError};
use repurpose::domain::SearchHit;
use repurpose::{ArtifactKind, ContentPipeline};

/// Search stub that returns canned snippets and records every query
pub struct StubSearch {
    results: Option<Vec<&'static str>>,
    calls: AtomicUsize,
    queries: Mutex<Vec<(String, usize)>>,
}

impl StubSearch {
    pub fn returning(snippets: Vec<&'static str>) -> Arc<Self> {
        Arc::new(Self {
            results: Some(snippets),
            calls: AtomicUsize::new(0),
            queries: Mutex::new(Vec::new()),
        })
    }

    /// A search service that cannot be reached
    pub fn unreachable() -> Arc<Self> {
        Arc::new(Self {
            results: None,
            calls: AtomicUsize::new(0),
            queries: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn queries(&self) -> Vec<(String, usize)> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl SearchAdapter for StubSearch {
    fn name(&self) -> &str {
        "stub-search"
    }

    async fn search(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<SearchHit>, RetrievalError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.queries
            .lock()
            .unwrap()
            .push((query.to_string(), max_results));

        match &self.results {
            Some(snippets) => Ok(snippets.iter().map(|s| SearchHit::from_content(*s)).collect()),
            None => Err(RetrievalError::Network("connection refused".into())),
        }
    }
}

/// What the model stub answers for one artifact kind
#[derive(Debug, Clone, Copy)]
pub enum Reply {
    Text(&'static str),
    Fail,
}

/// Model stub that answers per artifact kind and records every prompt
pub struct StubModel {
    replies: HashMap<ArtifactKind, Reply>,
    prompts: Mutex<Vec<(ArtifactKind, String)>>,
}

impl StubModel {
    /// Reply `blog` to the blog prompt and `derived` to every other prompt
    pub fn new(blog: Reply, derived: Reply) -> Arc<Self> {
        let mut replies = HashMap::new();
        replies.insert(ArtifactKind::BlogPost, blog);
        for kind in ArtifactKind::DERIVED {
            replies.insert(kind, derived);
        }
        Arc::new(Self {
            replies,
            prompts: Mutex::new(Vec::new()),
        })
    }

    /// Like [`StubModel::new`] but failing for one derived kind
    pub fn failing_on(kind: ArtifactKind) -> Arc<Self> {
        let mut replies = HashMap::new();
        for k in ArtifactKind::ALL {
            replies.insert(k, Reply::Text("X"));
        }
        replies.insert(ArtifactKind::BlogPost, Reply::Text("BLOG"));
        replies.insert(kind, Reply::Fail);
        Arc::new(Self {
            replies,
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn prompts(&self) -> Vec<(ArtifactKind, String)> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn prompt_for(&self, kind: ArtifactKind) -> Option<String> {
        self.prompts()
            .into_iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, p)| p)
    }
}

/// Identify which template produced a prompt by its fixed leading text
fn kind_of(prompt: &str) -> ArtifactKind {
    ArtifactKind::ALL
        .into_iter()
        .find(|kind| {
            let template = PromptTemplate::for_kind(*kind).text;
            let prefix = template.split('{').next().unwrap_or(template);
            prompt.starts_with(prefix)
        })
        .expect("prompt does not match any template")
}

#[async_trait]
impl CompletionAdapter for StubModel {
    fn name(&self) -> &str {
        "stub-model"
    }

    async fn complete(
        &self,
        prompt: &str,
        _temperature: f32,
    ) -> Result<AdapterOutput, GenerationError> {
        let kind = kind_of(prompt);
        self.prompts.lock().unwrap().push((kind, prompt.to_string()));

        match self.replies[&kind] {
            Reply::Text(text) => Ok(AdapterOutput::new(text.to_string())),
            Reply::Fail => Err(GenerationError::Provider {
                status: 500,
                body: "upstream exploded".into(),
            }),
        }
    }
}

pub fn pipeline(search: &Arc<StubSearch>, model: &Arc<StubModel>) -> ContentPipeline {
    ContentPipeline::from_adapters(search.clone(), model.clone())
}
