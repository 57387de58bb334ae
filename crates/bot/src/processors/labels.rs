//! Mergeability label processor.

use anyhow::{Context, Result};
use format::{decide_labels, Mergeable};
use tracing::{debug, info, instrument};

use super::{target, BotContext, Disposition};
use crate::github::PullRequestEvent;

/// Clear `fix-me` and sync `needs-rebase` with the PR's mergeability.
///
/// Webhook payloads often carry `mergeable: null`; in that case the PR is
/// fetched once more before deciding.
///
/// # Errors
///
/// Returns an error when a GitHub call fails.
#[instrument(skip_all, fields(repo = %event.repository.full_name, pr_number = event.pull_request.number))]
pub async fn update_labels(ctx: &BotContext, event: &PullRequestEvent) -> Result<Disposition> {
    let snapshot = event.pull_request.snapshot();

    if let Some(reason) = ctx.skip_parser.skip_reason(&snapshot) {
        info!("Skipping labelling due to {reason}");
        return Ok(Disposition::Skipped {
            reason: reason.to_string(),
        });
    }

    let mut mergeable = snapshot.mergeable;
    if mergeable == Mergeable::Unknown {
        mergeable = ctx
            .github
            .pull_request_mergeable(&event.repository.full_name, snapshot.number)
            .await
            .context("Failed to fetch pull request mergeability")?
            .into();
        debug!(?mergeable, "Refreshed mergeability");
    }

    let update = decide_labels(mergeable);
    ctx.reporter
        .update_labels(&target(event), &update)
        .await
        .context("Failed to update labels")?;

    Ok(Disposition::Labelled {
        add: update.add,
        remove: update.remove,
    })
}
