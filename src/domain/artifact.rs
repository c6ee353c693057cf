//! Artifacts produced by a pipeline run.
//!
//! The blog post is generated from research; the other three artifacts are
//! derived from the blog post alone.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kinds of generated text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    /// Long-form post drafted from research
    BlogPost,

    /// 5-8 post thread derived from the blog
    TweetThread,

    /// Social profile caption derived from the blog
    Caption,

    /// Short-form video script derived from the blog
    VideoScript,
}

impl ArtifactKind {
    /// All kinds in presentation order
    pub const ALL: [ArtifactKind; 4] = [
        ArtifactKind::BlogPost,
        ArtifactKind::TweetThread,
        ArtifactKind::Caption,
        ArtifactKind::VideoScript,
    ];

    /// Kinds derived from the blog post
    pub const DERIVED: [ArtifactKind; 3] = [
        ArtifactKind::TweetThread,
        ArtifactKind::Caption,
        ArtifactKind::VideoScript,
    ];

    /// Stable short name used in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactKind::BlogPost => "blog",
            ArtifactKind::TweetThread => "tweets",
            ArtifactKind::Caption => "caption",
            ArtifactKind::VideoScript => "script",
        }
    }

    /// Header printed above the artifact in console mode
    pub fn console_header(&self) -> &'static str {
        match self {
            ArtifactKind::BlogPost => "===== YOUR BLOG POST =====",
            ArtifactKind::TweetThread => "===== TWEET THREAD =====",
            ArtifactKind::Caption => "===== INSTAGRAM/LINKEDIN CAPTION =====",
            ArtifactKind::VideoScript => "===== VIDEO SCRIPT (SHORTS/TIKTOK) =====",
        }
    }

    /// Section title shown in the web form
    pub fn section_title(&self) -> &'static str {
        match self {
            ArtifactKind::BlogPost => "Blog Post",
            ArtifactKind::TweetThread => "Twitter Thread",
            ArtifactKind::Caption => "Instagram/LinkedIn Caption",
            ArtifactKind::VideoScript => "TikTok/Shorts Script",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A piece of generated text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedArtifact {
    /// Which artifact this is
    pub kind: ArtifactKind,

    /// Text returned by the model, unmodified
    pub content: String,

    /// When the artifact was generated
    pub created_at: DateTime<Utc>,

    /// Size in bytes
    pub size_bytes: u64,
}

impl GeneratedArtifact {
    /// Create a new artifact
    pub fn new(kind: ArtifactKind, content: String) -> Self {
        let size_bytes = content.len() as u64;
        Self {
            kind,
            content,
            created_at: Utc::now(),
            size_bytes,
        }
    }
}

/// The four artifacts of one successful run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentBundle {
    /// Identifier used to correlate log lines for this run
    pub run_id: Uuid,

    /// Topic the run was started with
    pub topic: String,

    pub blog: GeneratedArtifact,
    pub tweets: GeneratedArtifact,
    pub caption: GeneratedArtifact,
    pub script: GeneratedArtifact,

    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
}

impl ContentBundle {
    /// Artifacts in presentation order: blog, tweets, caption, script
    pub fn artifacts(&self) -> [&GeneratedArtifact; 4] {
        [&self.blog, &self.tweets, &self.caption, &self.script]
    }

    /// Look up an artifact by kind
    pub fn get(&self, kind: ArtifactKind) -> &GeneratedArtifact {
        match kind {
            ArtifactKind::BlogPost => &self.blog,
            ArtifactKind::TweetThread => &self.tweets,
            ArtifactKind::Caption => &self.caption,
            ArtifactKind::VideoScript => &self.script,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bundle() -> ContentBundle {
        let now = Utc::now();
        ContentBundle {
            run_id: Uuid::new_v4(),
            topic: "sleep".to_string(),
            blog: GeneratedArtifact::new(ArtifactKind::BlogPost, "BLOG".into()),
            tweets: GeneratedArtifact::new(ArtifactKind::TweetThread, "T".into()),
            caption: GeneratedArtifact::new(ArtifactKind::Caption, "C".into()),
            script: GeneratedArtifact::new(ArtifactKind::VideoScript, "S".into()),
            started_at: now,
            completed_at: now,
        }
    }

    #[test]
    fn test_artifact_creation() {
        let artifact = GeneratedArtifact::new(
            ArtifactKind::Caption,
            "Small habits, big wins.".to_string(),
        );

        assert_eq!(artifact.kind, ArtifactKind::Caption);
        assert_eq!(artifact.size_bytes, 23);
    }

    #[test]
    fn test_bundle_order_matches_kind_order() {
        let bundle = bundle();
        let kinds: Vec<ArtifactKind> = bundle.artifacts().iter().map(|a| a.kind).collect();
        assert_eq!(kinds, ArtifactKind::ALL.to_vec());

        for kind in ArtifactKind::ALL {
            assert_eq!(bundle.get(kind).kind, kind);
        }
    }

    #[test]
    fn test_bundle_serialization() {
        let json = serde_json::to_value(bundle()).unwrap();

        assert_eq!(json["topic"], "sleep");
        assert_eq!(json["blog"]["kind"], "blog_post");
        assert_eq!(json["script"]["content"], "S");
    }
}
