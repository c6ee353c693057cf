//! Generation client: sends a rendered prompt to the model once.

use std::sync::Arc;

use tracing::{debug, instrument};

use super::error::GenerationError;
use super::prompts::RenderedPrompt;
use crate::adapters::CompletionAdapter;

/// Sampling temperature used for every completion
pub const TEMPERATURE: f32 = 0.7;

/// Wraps a completion adapter with the fixed sampling settings
#[derive(Clone)]
pub struct Generator {
    adapter: Arc<dyn CompletionAdapter>,
}

impl Generator {
    pub fn new(adapter: Arc<dyn CompletionAdapter>) -> Self {
        Self { adapter }
    }

    /// Generate text for a prompt.
    ///
    /// Blank prompts are rejected without calling the service. A blank
    /// completion is treated as a failure so callers never receive an
    /// empty artifact.
    #[instrument(skip(self, prompt), fields(adapter = %self.adapter.name()))]
    pub async fn generate(&self, prompt: &RenderedPrompt) -> Result<String, GenerationError> {
        if prompt.is_blank() {
            return Err(GenerationError::EmptyPrompt);
        }

        let output = self.adapter.complete(prompt.as_str(), TEMPERATURE).await?;

        if output.content.trim().is_empty() {
            return Err(GenerationError::EmptyCompletion);
        }

        debug!(
            bytes = output.content.len(),
            tokens_used = ?output.tokens_used,
            "Generated text"
        );
        Ok(output.content)
    }
}
