//! Core pipeline logic.
//!
//! This module contains:
//! - Research: topic → research snippets
//! - Prompts: fixed templates, one per artifact
//! - Generation: single-shot model calls
//! - Pipeline: the end-to-end content run
//! - Error: the failure taxonomy

pub mod error;
pub mod generation;
pub mod pipeline;
pub mod prompts;
pub mod research;

// Re-export commonly used types
pub use error::{ErrorKind, GenerationError, InputError, PipelineError, RetrievalError};
pub use generation::{Generator, TEMPERATURE};
pub use pipeline::{ContentPipeline, DerivativeMode};
pub use prompts::{render_blog, render_derived, PromptTemplate, RenderedPrompt, TemplateInputs};
pub use research::{Researcher, MAX_RESULTS};
