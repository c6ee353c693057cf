//! Prompt templates, one per artifact kind.
//!
//! Templates are immutable constants with `{name}` placeholders. Rendering
//! is a single pass over the template text: substituted values are never
//! re-scanned, so user or model text containing braces is inserted verbatim.

use std::fmt;

use crate::domain::ArtifactKind;

/// A fixed prompt pattern with named placeholders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptTemplate {
    /// Artifact this template produces
    pub kind: ArtifactKind,

    /// Template text
    pub text: &'static str,

    /// Placeholder names the template expects
    pub input_variables: &'static [&'static str],
}

pub const BLOG_TEMPLATE: PromptTemplate = PromptTemplate {
    kind: ArtifactKind::BlogPost,
    input_variables: &["topic", "research"],
    text: r#"You are an expert blog writer.

Use the following research to inform your writing:
{research}

Now write a helpful blog post on: "{topic}"

Include:
- A strong headline
- A clear introduction
- 3-5 key sections with subheadings
- Practical advice
- A call-to-action at the end
"#,
};

pub const TWEET_THREAD_TEMPLATE: PromptTemplate = PromptTemplate {
    kind: ArtifactKind::TweetThread,
    input_variables: &["blog"],
    text: r#"You are a Twitter expert.

Turn this blog into a 5-8 tweet thread. Each tweet should be helpful, engaging, and standalone if possible. Start with a strong hook.

BLOG:
{blog}
"#,
};

pub const CAPTION_TEMPLATE: PromptTemplate = PromptTemplate {
    kind: ArtifactKind::Caption,
    input_variables: &["blog"],
    text: r#"Turn the blog below into a motivational, friendly Instagram or LinkedIn caption.

Make it:
- Conversational
- Helpful
- Uplifting
- End with a relatable call-to-action

BLOG:
{blog}
"#,
};

pub const SCRIPT_TEMPLATE: PromptTemplate = PromptTemplate {
    kind: ArtifactKind::VideoScript,
    input_variables: &["blog"],
    text: r#"Turn the blog below into a short video script (for TikTok or YouTube Shorts).

Format:
- Hook
- Quick facts or value
- Call-to-action

Use punchy, informal language. Script should be 45-60 seconds max.

BLOG:
{blog}
"#,
};

/// Named values for a template.
///
/// The variant fixes which placeholders are available, so every template
/// receives exactly the inputs it declares.
#[derive(Debug, Clone, Copy)]
pub enum TemplateInputs<'a> {
    /// Inputs for the blog template
    Blog { topic: &'a str, research: &'a str },

    /// Inputs for templates derived from the blog
    Derived { blog: &'a str },
}

impl<'a> TemplateInputs<'a> {
    fn lookup(&self, name: &str) -> Option<&'a str> {
        match (self, name) {
            (TemplateInputs::Blog { topic, .. }, "topic") => Some(*topic),
            (TemplateInputs::Blog { research, .. }, "research") => Some(*research),
            (TemplateInputs::Derived { blog }, "blog") => Some(*blog),
            _ => None,
        }
    }
}

/// A prompt ready to send to the model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPrompt(String);

impl RenderedPrompt {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for RenderedPrompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PromptTemplate {
    /// Template used to produce the given artifact kind
    pub fn for_kind(kind: ArtifactKind) -> &'static PromptTemplate {
        match kind {
            ArtifactKind::BlogPost => &BLOG_TEMPLATE,
            ArtifactKind::TweetThread => &TWEET_THREAD_TEMPLATE,
            ArtifactKind::Caption => &CAPTION_TEMPLATE,
            ArtifactKind::VideoScript => &SCRIPT_TEMPLATE,
        }
    }

    /// Substitute the inputs into the template.
    ///
    /// A `{name}` the inputs do not provide is left as written.
    pub fn render(&self, inputs: TemplateInputs<'_>) -> RenderedPrompt {
        let mut out = String::with_capacity(self.text.len());
        let mut rest = self.text;

        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];

            match after.find('}') {
                Some(close) => {
                    let name = &after[..close];
                    match inputs.lookup(name) {
                        Some(value) => out.push_str(value),
                        None => {
                            out.push('{');
                            out.push_str(name);
                            out.push('}');
                        }
                    }
                    rest = &after[close + 1..];
                }
                None => {
                    out.push_str(&rest[open..]);
                    rest = "";
                }
            }
        }
        out.push_str(rest);

        RenderedPrompt(out)
    }
}

/// Render the blog prompt
pub fn render_blog(topic: &str, research: &str) -> RenderedPrompt {
    BLOG_TEMPLATE.render(TemplateInputs::Blog { topic, research })
}

/// Render the prompt for an artifact derived from the blog
pub fn render_derived(kind: ArtifactKind, blog: &str) -> RenderedPrompt {
    PromptTemplate::for_kind(kind).render(TemplateInputs::Derived { blog })
}
