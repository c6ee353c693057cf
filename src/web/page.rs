//! HTML for the web form.

use maud::{html, Markup, PreEscaped, DOCTYPE};
use pulldown_cmark::{Event, Options, Parser};

use crate::domain::ContentBundle;

/// What to show below the form
pub enum Outcome<'a> {
    /// Nothing submitted yet
    Empty,

    /// Non-fatal input problem; no run was made
    Warning(&'a str),

    /// The run failed; nothing partial is shown
    Failure(String),

    /// All four artifacts
    Success(&'a ContentBundle),
}

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; background: #fafafa; color: #222; }
main { max-width: 46rem; margin: 2rem auto; padding: 0 1rem; }
form { display: flex; flex-wrap: wrap; gap: .5rem; align-items: center; }
label { width: 100%; font-weight: 600; }
input[type=text] { flex: 1; padding: .5rem; font-size: 1rem; }
button { padding: .5rem 1.25rem; font-size: 1rem; cursor: pointer; }
.notice { margin: 1rem 0; padding: .75rem 1rem; border-radius: .25rem; }
.warning { background: #fff8e1; border: 1px solid #f0c36d; }
.error { background: #fdecea; border: 1px solid #f5a9a3; }
.busy { margin: 1rem 0; color: #555; }
.spinner { display: inline-block; width: 1em; height: 1em; margin-right: .5em; vertical-align: -.15em;
           border: 2px solid #ccc; border-top-color: #555; border-radius: 50%; animation: spin 1s linear infinite; }
@keyframes spin { to { transform: rotate(360deg); } }
.artifact .content { background: #fff; border: 1px solid #e5e5e5; padding: 1rem; border-radius: .25rem; }
"#;

const SCRIPT: &str = r#"
document.getElementById('generate-form').addEventListener('submit', function () {
  document.getElementById('busy').hidden = false;
  document.getElementById('results').hidden = true;
  this.querySelector('button').disabled = true;
});
"#;

/// Render the full page
pub fn render(outcome: &Outcome<'_>, topic: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { "AI Blog Agent" }
                style { (PreEscaped(STYLE)) }
            }
            body {
                main {
                    h1 { "AI Blog + Content Generator" }
                    form id="generate-form" method="post" action="/generate" {
                        label for="topic" { "Enter a blog topic:" }
                        input type="text" id="topic" name="topic" value=(topic);
                        button type="submit" { "Generate" }
                    }
                    div id="busy" class="busy" hidden {
                        span class="spinner" {}
                        "Researching and generating..."
                    }
                    div id="results" {
                        (render_outcome(outcome))
                    }
                }
                script { (PreEscaped(SCRIPT)) }
            }
        }
    }
}

fn render_outcome(outcome: &Outcome<'_>) -> Markup {
    html! {
        @match outcome {
            Outcome::Empty => {},
            Outcome::Warning(message) => {
                div class="notice warning" role="alert" { (message) }
            },
            Outcome::Failure(message) => {
                div class="notice error" role="alert" { (message) }
            },
            Outcome::Success(bundle) => {
                @for artifact in bundle.artifacts() {
                    section class="artifact" data-kind=(artifact.kind.as_str()) {
                        h2 { (artifact.kind.section_title()) }
                        div class="content" { (render_markdown(&artifact.content)) }
                    }
                }
            }
        }
    }
}

/// Render model output as Markdown. Raw HTML in the source is shown as text.
fn render_markdown(text: &str) -> Markup {
    let events = Parser::new_ext(text, Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH).map(
        |event| match event {
            Event::Html(raw) => Event::Text(raw),
            other => other,
        },
    );

    let mut out = String::with_capacity(text.len() + text.len() / 2);
    pulldown_cmark::html::push_html(&mut out, events);
    PreEscaped(out)
}
