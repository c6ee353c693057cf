//! repurpose - research-backed blog generation and repurposing
//!
//! Given a topic, fetches web search results, asks a language model to draft
//! a blog post from them, then derives a tweet thread, a social caption, and
//! a short video script from that post.
//!
//! # Architecture
//!
//! Data flows one way: topic → research → blog → {tweets, caption, script}.
//! - Both external services sit behind adapter traits
//! - Clients are built once at startup and injected into the pipeline
//! - Either shell (console or web form) drives the same pipeline
//!
//! # Modules
//!
//! - `adapters`: External service integrations (Tavily, OpenAI)
//! - `core`: Pipeline logic (Research, Prompts, Generation, Pipeline)
//! - `domain`: Data structures (Topic, ResearchBundle, ContentBundle)
//! - `cli`: Command-line interface
//! - `web`: Interactive web form
//! - `config`: Process configuration and secrets
//!
//! # Usage
//!
//! ```bash
//! # Console mode
//! repurpose generate "remote work productivity"
//!
//! # Prompt for the topic on stdin
//! repurpose generate
//!
//! # Web form on http://127.0.0.1:8501
//! repurpose serve
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod web;

// Re-export main types at crate root for convenience
pub use crate::core::{ContentPipeline, DerivativeMode, ErrorKind, PipelineError};
pub use crate::domain::{ArtifactKind, ContentBundle, GeneratedArtifact, ResearchBundle, Topic};
