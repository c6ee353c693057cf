//! Web Form Integration Tests
//!
//! Calls the form handlers directly with stub-backed pipelines.

mod common;

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Form;

use common::{pipeline, Reply, StubModel, StubSearch};
use repurpose::web::{self, GenerateForm, BLANK_TOPIC_WARNING};
use repurpose::ArtifactKind;

fn form(topic: &str) -> Form<GenerateForm> {
    Form(GenerateForm {
        topic: topic.to_string(),
    })
}

#[tokio::test]
async fn test_index_renders_form() {
    let html = web::index().await.into_string();

    assert!(html.contains("AI Blog + Content Generator"));
    assert!(html.contains(r#"action="/generate""#));
    assert!(html.contains(">Generate</button>"));
}

#[tokio::test]
async fn test_health() {
    assert_eq!(web::health().await, "ok");
}

#[tokio::test]
async fn test_blank_topic_shows_warning_without_running() {
    let search = StubSearch::returning(vec!["Snippet A"]);
    let model = StubModel::new(Reply::Text("BLOG"), Reply::Text("X"));
    let state = Arc::new(pipeline(&search, &model));

    let (status, html) = web::generate(State(state), form("   ")).await;
    let html = html.into_string();

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(html.contains(BLANK_TOPIC_WARNING));
    assert_eq!(search.calls(), 0);
    assert_eq!(model.calls(), 0);
}

#[tokio::test]
async fn test_success_renders_sections_in_order() {
    let search = StubSearch::returning(vec!["Snippet A", "Snippet B"]);
    let model = StubModel::new(Reply::Text("BLOG"), Reply::Text("X"));
    let state = Arc::new(pipeline(&search, &model));

    let (status, html) = web::generate(State(state), form("remote work productivity")).await;
    let html = html.into_string();

    assert_eq!(status, StatusCode::OK);

    let positions: Vec<usize> = ArtifactKind::ALL
        .iter()
        .map(|kind| {
            html.find(&format!("<h2>{}</h2>", kind.section_title()))
                .unwrap_or_else(|| panic!("missing section for {}", kind))
        })
        .collect();
    let mut sorted = positions.clone();
    sorted.sort();
    assert_eq!(positions, sorted);

    assert!(html.contains(r#"value="remote work productivity""#));
}

#[tokio::test]
async fn test_markdown_artifacts_are_rendered() {
    let search = StubSearch::returning(vec!["Snippet A"]);
    let model = StubModel::new(
        Reply::Text("# Headline\n\n**bold** point\n\n<script>alert(1)</script>"),
        Reply::Text("X"),
    );
    let state = Arc::new(pipeline(&search, &model));

    let (status, html) = web::generate(State(state), form("remote work productivity")).await;
    let html = html.into_string();

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("<h1>Headline</h1>"));
    assert!(html.contains("<strong>bold</strong> point"));
    assert!(!html.contains("# Headline"));
    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
}

#[tokio::test]
async fn test_failure_renders_error_without_partial_results() {
    let search = StubSearch::returning(vec!["Snippet A"]);
    let model = StubModel::failing_on(ArtifactKind::Caption);
    let state = Arc::new(pipeline(&search, &model));

    let (status, html) = web::generate(State(state), form("topic")).await;
    let html = html.into_string();

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(html.contains("Could not generate the caption"));
    assert!(!html.contains(r#"class="artifact""#));
    assert!(!html.contains("<h2>Blog Post</h2>"));
}

#[tokio::test]
async fn test_retrieval_failure_is_reported() {
    let search = StubSearch::returning(vec![]);
    let model = StubModel::new(Reply::Text("BLOG"), Reply::Text("X"));
    let state = Arc::new(pipeline(&search, &model));

    let (status, html) = web::generate(State(state), form("nothing here")).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(html.into_string().contains("No research could be found"));
    assert_eq!(model.calls(), 0);
}
