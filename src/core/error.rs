//! Error taxonomy for a pipeline run.
//!
//! Every failure a run can produce maps to exactly one [`ErrorKind`].
//! Configuration problems are reported separately by
//! [`crate::config::ConfigError`] before any run starts.

use thiserror::Error;

use crate::domain::ArtifactKind;

/// Rejected user input. Raised before any external call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("topic must not be empty")]
    EmptyTopic,
}

/// Failures talking to the search service
#[derive(Debug, Error)]
pub enum RetrievalError {
    #[error("search service unreachable: {0}")]
    Network(String),

    #[error("search service rejected credentials: {0}")]
    Authentication(String),

    #[error("search service quota or rate limit exceeded: {0}")]
    RateLimit(String),

    #[error("search service returned HTTP {status}: {body}")]
    Provider { status: u16, body: String },

    #[error("could not decode search response: {0}")]
    Decode(String),

    #[error("search for '{query}' returned no usable content")]
    NoResults { query: String },
}

/// Failures talking to the language-model service
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("prompt must not be empty")]
    EmptyPrompt,

    #[error("model service unreachable: {0}")]
    Network(String),

    #[error("model service rejected credentials: {0}")]
    Authentication(String),

    #[error("model service quota or rate limit exceeded: {0}")]
    RateLimit(String),

    #[error("model service returned HTTP {status}: {body}")]
    Provider { status: u16, body: String },

    #[error("could not decode model response: {0}")]
    Decode(String),

    #[error("model returned an empty completion")]
    EmptyCompletion,
}

/// Coarse classification of a failed run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Input,
    Retrieval,
    Generation,
}

/// Error returned by [`crate::core::ContentPipeline::run`]
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error("research failed: {0}")]
    Retrieval(#[from] RetrievalError),

    #[error("generating the {artifact} failed: {source}")]
    Generation {
        artifact: ArtifactKind,
        #[source]
        source: GenerationError,
    },
}

impl PipelineError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PipelineError::Input(_) => ErrorKind::Input,
            PipelineError::Retrieval(_) => ErrorKind::Retrieval,
            PipelineError::Generation { .. } => ErrorKind::Generation,
        }
    }

    /// Message suitable for showing to the end user
    pub fn user_message(&self) -> String {
        match self {
            PipelineError::Input(_) => "Please enter a topic.".to_string(),
            PipelineError::Retrieval(RetrievalError::NoResults { query }) => format!(
                "No research could be found for \"{}\". Try a broader topic.",
                query
            ),
            PipelineError::Retrieval(e) => format!("Research failed: {}", e),
            PipelineError::Generation { artifact, source } => {
                format!("Could not generate the {}: {}", artifact, source)
            }
        }
    }
}
