//! HTTP server for GitHub webhooks.

use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, State},
    http::{HeaderMap, StatusCode},
    response::Json,
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info, warn};

use crate::github::PullRequestEvent;
use crate::processors::{check_format, post_dependabot_info, update_labels, BotContext, Disposition};

/// GitHub caps webhook payloads at 25 MB.
const MAX_BODY_BYTES: usize = 25 * 1024 * 1024;

/// Actions that trigger the format check.
const FORMAT_ACTIONS: &[&str] = &["opened", "edited", "synchronize", "reopened", "ready_for_review"];

/// Actions that trigger the label update.
const LABEL_ACTIONS: &[&str] = &["synchronize", "reopened"];

/// Build the HTTP router for the bot.
pub fn build_router(ctx: BotContext) -> Router {
    Router::new()
        .route("/webhooks/github", post(handle_github_webhook))
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(DefaultBodyLimit::max(MAX_BODY_BYTES)),
        )
        .with_state(Arc::new(ctx))
}

/// Health check endpoint.
async fn health_check() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

/// Readiness check endpoint.
async fn readiness_check() -> Json<Value> {
    Json(json!({ "status": "ready" }))
}

/// Handle GitHub webhook
async fn handle_github_webhook(
    State(ctx): State<Arc<BotContext>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Value>, StatusCode> {
    let event_type = headers
        .get("X-GitHub-Event")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown");

    let delivery_id = headers
        .get("X-GitHub-Delivery")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown");

    info!(
        event_type = %event_type,
        delivery_id = %delivery_id,
        "Received GitHub webhook"
    );

    if event_type != "pull_request" {
        debug!(event_type = %event_type, "Ignoring non-pull_request event");
        return Ok(Json(json!({
            "status": "ignored",
            "reason": "not_pull_request_event"
        })));
    }

    let event: PullRequestEvent = serde_json::from_slice(&body).map_err(|e| {
        error!(error = %e, "Failed to parse GitHub webhook payload");
        StatusCode::BAD_REQUEST
    })?;

    let results = process_event(&ctx, &event).await.map_err(|e| {
        error!(
            delivery_id = %delivery_id,
            repo = %event.repository.full_name,
            pr_number = event.pull_request.number,
            error = %format!("{e:#}"),
            "Failed to process pull request event"
        );
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    if results.is_empty() {
        debug!(action = %event.action, "Ignoring pull_request action");
        return Ok(Json(json!({
            "status": "ignored",
            "reason": "unhandled_action"
        })));
    }

    Ok(Json(json!({
        "status": "processed",
        "action": event.action,
        "results": results
            .into_iter()
            .map(|(name, disposition)| (name.to_string(), json!(disposition)))
            .collect::<serde_json::Map<_, _>>()
    })))
}

/// Run every processor subscribed to the event's action.
///
/// The dependabot notice runs before the format check so that it is posted
/// whatever the format verdict. A failing processor does not stop the ones
/// after it; the first error is returned once all of them have run.
pub async fn process_event(
    ctx: &BotContext,
    event: &PullRequestEvent,
) -> anyhow::Result<Vec<(&'static str, Disposition)>> {
    let action = event.action.as_str();
    let mut results = ProcessorResults::default();

    if action == "opened" {
        results.record("dependabot", post_dependabot_info(ctx, event).await);
    }

    if FORMAT_ACTIONS.contains(&action) {
        results.record("format", check_format(ctx, event).await);
    }

    if LABEL_ACTIONS.contains(&action) {
        results.record("labels", update_labels(ctx, event).await);
    }

    results.finish()
}

/// Dispositions of the processors that succeeded, plus the first failure.
#[derive(Default)]
struct ProcessorResults {
    completed: Vec<(&'static str, Disposition)>,
    first_error: Option<anyhow::Error>,
}

impl ProcessorResults {
    fn record(&mut self, processor: &'static str, outcome: anyhow::Result<Disposition>) {
        match outcome {
            Ok(disposition) => self.completed.push((processor, disposition)),
            Err(e) => {
                warn!(processor, error = %format!("{e:#}"), "Processor failed");
                if self.first_error.is_none() {
                    self.first_error = Some(e);
                }
            }
        }
    }

    fn finish(self) -> anyhow::Result<Vec<(&'static str, Disposition)>> {
        match self.first_error {
            Some(e) => Err(e),
            None => Ok(self.completed),
        }
    }
}
