//! Content pipeline: research → blog → tweets, caption, script.
//!
//! Each step depends on the one before it, except the three derived
//! artifacts which read only the blog text. A failure anywhere aborts the
//! run and discards whatever was already generated.

use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument, warn, Span};
use uuid::Uuid;

use super::error::PipelineError;
use super::generation::Generator;
use super::prompts::{render_blog, render_derived, RenderedPrompt};
use super::research::Researcher;
use crate::adapters::{CompletionAdapter, SearchAdapter};
use crate::domain::{ArtifactKind, ContentBundle, GeneratedArtifact, Topic};

/// How the three blog-derived artifacts are generated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DerivativeMode {
    /// One after another: tweets, caption, script
    #[default]
    Sequential,

    /// All three in flight at once; the first failure cancels the rest
    Concurrent,
}

/// Orchestrates one content run per call to [`ContentPipeline::run`].
///
/// Holds only read-only client handles, so a single pipeline can be shared
/// across concurrent runs.
#[derive(Clone)]
pub struct ContentPipeline {
    researcher: Researcher,
    generator: Generator,
    mode: DerivativeMode,
}

impl ContentPipeline {
    pub fn new(researcher: Researcher, generator: Generator) -> Self {
        Self {
            researcher,
            generator,
            mode: DerivativeMode::default(),
        }
    }

    /// Build a pipeline directly from the two service adapters
    pub fn from_adapters(
        search: Arc<dyn SearchAdapter>,
        model: Arc<dyn CompletionAdapter>,
    ) -> Self {
        Self::new(Researcher::new(search), Generator::new(model))
    }

    pub fn with_derivative_mode(mut self, mode: DerivativeMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn derivative_mode(&self) -> DerivativeMode {
        self.mode
    }

    /// Run the full pipeline for a topic.
    ///
    /// Returns all four artifacts or exactly one error. A blank topic fails
    /// before any service is contacted.
    #[instrument(skip(self, topic), fields(run_id = tracing::field::Empty, mode = ?self.mode))]
    pub async fn run(&self, topic: &str) -> Result<ContentBundle, PipelineError> {
        let run_id = Uuid::new_v4();
        Span::current().record("run_id", tracing::field::display(run_id));

        match self.run_inner(run_id, topic).await {
            Ok(bundle) => Ok(bundle),
            Err(e @ PipelineError::Input(_)) => {
                warn!(error = %e, "Rejected input");
                Err(e)
            }
            Err(e) => {
                error!(error = %e, "Run failed");
                Err(e)
            }
        }
    }

    async fn run_inner(&self, run_id: Uuid, raw_topic: &str) -> Result<ContentBundle, PipelineError> {
        let topic = Topic::parse(raw_topic)?;
        let started_at = Utc::now();
        let run_start = Instant::now();
        info!(%topic, "Starting content run");

        let research = self.researcher.fetch_research(&topic).await?;

        let blog = self
            .generate_artifact(
                ArtifactKind::BlogPost,
                render_blog(topic.as_str(), &research.joined()),
            )
            .await?;

        let (tweets, caption, script) = match self.mode {
            DerivativeMode::Sequential => {
                let tweets = self.derive(ArtifactKind::TweetThread, &blog.content).await?;
                let caption = self.derive(ArtifactKind::Caption, &blog.content).await?;
                let script = self.derive(ArtifactKind::VideoScript, &blog.content).await?;
                (tweets, caption, script)
            }
            DerivativeMode::Concurrent => tokio::try_join!(
                self.derive(ArtifactKind::TweetThread, &blog.content),
                self.derive(ArtifactKind::Caption, &blog.content),
                self.derive(ArtifactKind::VideoScript, &blog.content),
            )?,
        };

        info!(
            duration_ms = run_start.elapsed().as_millis() as u64,
            "Run completed successfully"
        );

        Ok(ContentBundle {
            run_id,
            topic: topic.to_string(),
            blog,
            tweets,
            caption,
            script,
            started_at,
            completed_at: Utc::now(),
        })
    }

    /// Generate an artifact that reads only the blog text
    async fn derive(&self, kind: ArtifactKind, blog: &str) -> Result<GeneratedArtifact, PipelineError> {
        self.generate_artifact(kind, render_derived(kind, blog)).await
    }

    async fn generate_artifact(
        &self,
        kind: ArtifactKind,
        prompt: RenderedPrompt,
    ) -> Result<GeneratedArtifact, PipelineError> {
        let step_start = Instant::now();

        let content = self
            .generator
            .generate(&prompt)
            .await
            .map_err(|source| PipelineError::Generation {
                artifact: kind,
                source,
            })?;

        info!(
            artifact = %kind,
            bytes = content.len(),
            duration_ms = step_start.elapsed().as_millis() as u64,
            "Artifact generated"
        );
        Ok(GeneratedArtifact::new(kind, content))
    }
}
