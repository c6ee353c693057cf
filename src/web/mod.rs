//! Interactive web form.
//!
//! `GET /` shows the form, `POST /generate` runs the pipeline for the
//! submitted topic and renders the four artifacts, `GET /health` reports
//! liveness. Each request runs in isolation against the shared pipeline.

pub mod page;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Form, Router};
use maud::Markup;
use serde::Deserialize;
use tracing::info;

use crate::core::{ContentPipeline, ErrorKind};
use page::Outcome;

pub const BLANK_TOPIC_WARNING: &str = "Please enter a topic.";

/// Form body for `POST /generate`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateForm {
    #[serde(default)]
    pub topic: String,
}

/// Build the router over a shared pipeline
pub fn router(pipeline: Arc<ContentPipeline>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/generate", post(generate))
        .route("/health", get(health))
        .with_state(pipeline)
}

/// Bind and serve until Ctrl-C
pub async fn serve(pipeline: Arc<ContentPipeline>, addr: SocketAddr) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind web server to {}", addr))?;

    info!(%addr, "Serving web form at http://{}", addr);

    axum::serve(listener, router(pipeline))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Web server failed")
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutting down web server");
    }
}

pub async fn index() -> Markup {
    page::render(&Outcome::Empty, "")
}

pub async fn health() -> &'static str {
    "ok"
}

/// Validate the topic, run the pipeline, and render the outcome
pub async fn generate(
    State(pipeline): State<Arc<ContentPipeline>>,
    Form(form): Form<GenerateForm>,
) -> (StatusCode, Markup) {
    if form.topic.trim().is_empty() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            page::render(&Outcome::Warning(BLANK_TOPIC_WARNING), &form.topic),
        );
    }

    match pipeline.run(&form.topic).await {
        Ok(bundle) => (
            StatusCode::OK,
            page::render(&Outcome::Success(&bundle), &form.topic),
        ),
        Err(e) => {
            let status = match e.kind() {
                ErrorKind::Input => StatusCode::UNPROCESSABLE_ENTITY,
                ErrorKind::Retrieval | ErrorKind::Generation => StatusCode::BAD_GATEWAY,
            };
            (
                status,
                page::render(&Outcome::Failure(e.user_message()), &form.topic),
            )
        }
    }
}
