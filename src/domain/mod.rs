//! Domain types for the content pipeline.
//!
//! All values are request-scoped and live only for one run:
//! - Topic: validated user input
//! - ResearchBundle: search snippets for the topic
//! - GeneratedArtifact / ContentBundle: model output

pub mod artifact;
pub mod research;
pub mod topic;

// Re-export commonly used types
pub use artifact::{ArtifactKind, ContentBundle, GeneratedArtifact};
pub use research::{ResearchBundle, SearchHit};
pub use topic::Topic;
