//! Console Generation Tests
//!
//! Drives `cli::generate` end to end with in-memory stdin/stdout and
//! stub-backed pipelines.

mod common;

use std::io::Cursor;

use common::{pipeline, Reply, StubModel, StubSearch};
use repurpose::cli::{generate, OutputFormat};
use repurpose::ArtifactKind;

const PROMPT: &str = "Enter a blog topic: ";

#[tokio::test]
async fn test_reads_topic_and_prints_four_sections() {
    let search = StubSearch::returning(vec!["Snippet A", "Snippet B"]);
    let model = StubModel::new(Reply::Text("BLOG"), Reply::Text("X"));
    let pipeline = pipeline(&search, &model);

    let mut input = Cursor::new("remote work productivity\n");
    let mut output = Vec::new();

    generate(&pipeline, None, OutputFormat::Text, &mut input, &mut output)
        .await
        .unwrap();
    let out = String::from_utf8(output).unwrap();

    assert!(out.starts_with(PROMPT));
    let positions: Vec<usize> = ArtifactKind::ALL
        .iter()
        .map(|kind| {
            out.find(kind.console_header())
                .unwrap_or_else(|| panic!("missing header for {}", kind))
        })
        .collect();
    let mut sorted = positions.clone();
    sorted.sort();
    assert_eq!(positions, sorted);
    assert!(out.contains("===== YOUR BLOG POST =====\n\nBLOG\n"));

    assert_eq!(search.queries(), vec![("remote work productivity".to_string(), 5)]);
    assert_eq!(model.calls(), 4);
}

#[tokio::test]
async fn test_topic_argument_skips_prompt() {
    let search = StubSearch::returning(vec!["Snippet A"]);
    let model = StubModel::new(Reply::Text("BLOG"), Reply::Text("X"));
    let pipeline = pipeline(&search, &model);

    let mut input = Cursor::new("");
    let mut output = Vec::new();

    generate(
        &pipeline,
        Some("sleep hygiene".to_string()),
        OutputFormat::Json,
        &mut input,
        &mut output,
    )
    .await
    .unwrap();

    let run: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(run["topic"], "sleep hygiene");
    assert_eq!(run["blog"]["content"], "BLOG");
}

#[tokio::test]
async fn test_blank_stdin_asks_for_topic() {
    let search = StubSearch::returning(vec!["Snippet A"]);
    let model = StubModel::new(Reply::Text("BLOG"), Reply::Text("X"));
    let pipeline = pipeline(&search, &model);

    let mut input = Cursor::new("   \n");
    let mut output = Vec::new();

    let err = generate(&pipeline, None, OutputFormat::Text, &mut input, &mut output)
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Please enter a topic.");
    assert_eq!(String::from_utf8(output).unwrap(), PROMPT);
    assert_eq!(search.calls(), 0);
    assert_eq!(model.calls(), 0);
}

#[tokio::test]
async fn test_caption_failure_prints_no_artifacts() {
    let search = StubSearch::returning(vec!["Snippet A"]);
    let model = StubModel::failing_on(ArtifactKind::Caption);
    let pipeline = pipeline(&search, &model);

    let mut input = Cursor::new("remote work productivity\n");
    let mut output = Vec::new();

    let err = generate(&pipeline, None, OutputFormat::Text, &mut input, &mut output)
        .await
        .unwrap_err();

    assert!(err.to_string().starts_with("Could not generate the caption"));
    assert_eq!(String::from_utf8(output).unwrap(), PROMPT);

    // With the topic on the command line nothing at all reaches stdout
    let mut output = Vec::new();
    let result = generate(
        &pipeline,
        Some("remote work productivity".to_string()),
        OutputFormat::Text,
        &mut Cursor::new(""),
        &mut output,
    )
    .await;

    assert!(result.is_err());
    assert!(output.is_empty());
}
