//! The user-supplied topic that drives a pipeline run.

use std::fmt;

use serde::Serialize;

use crate::core::error::InputError;

/// A validated, non-blank topic.
///
/// Surrounding whitespace (including the newline left over from a console
/// read) is trimmed; interior whitespace is preserved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Topic(String);

impl Topic {
    /// Validate raw user input as a topic
    pub fn parse(raw: &str) -> Result<Self, InputError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(InputError::EmptyTopic);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Topic {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_trims_input() {
        let topic = Topic::parse("  remote work productivity\n").unwrap();
        assert_eq!(topic.as_str(), "remote work productivity");
    }

    #[test]
    fn test_blank_topic_rejected() {
        assert_eq!(Topic::parse(""), Err(InputError::EmptyTopic));
        assert_eq!(Topic::parse(" \t\n "), Err(InputError::EmptyTopic));
    }

    #[test]
    fn test_interior_whitespace_preserved() {
        let topic = Topic::parse("deep   work").unwrap();
        assert_eq!(topic.to_string(), "deep   work");
    }
}
