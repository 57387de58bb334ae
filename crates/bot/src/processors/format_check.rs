//! Format check processor.

use anyhow::{Context, Result};
use format::constants::{FORMAT_CHECK_NAME, FORMAT_SUCCESS_DESCRIPTION};
use format::{FormatEngine, FormatOutcome};
use tracing::{info, instrument};

use super::{target, BotContext, Disposition};
use crate::github::{CommitState, PullRequestEvent};

/// Run the format checks for a pull request and report the verdict.
///
/// Reports one commit status, plus one consolidated comment when any check
/// failed. Skipped, unconfigured and disabled pull requests get neither.
///
/// # Errors
///
/// Returns an error when the configuration cannot be loaded or turned into
/// checks, or when a GitHub call fails.
#[instrument(skip_all, fields(repo = %event.repository.full_name, pr_number = event.pull_request.number))]
pub async fn check_format(ctx: &BotContext, event: &PullRequestEvent) -> Result<Disposition> {
    let mut snapshot = event.pull_request.snapshot();

    if let Some(reason) = ctx.skip_parser.skip_reason(&snapshot) {
        info!("Skipping format due to {reason}");
        return Ok(Disposition::Skipped {
            reason: reason.to_string(),
        });
    }

    let Some(config) = ctx
        .github
        .fetch_config_file(&event.repository.full_name, &ctx.config_path)
        .await
        .context("Failed to load configuration file")?
    else {
        info!(path = %ctx.config_path, "Skipping format due to missing configuration file");
        return Ok(Disposition::Unconfigured);
    };

    let engine = FormatEngine::from_config(&config.wildfly)
        .context("Invalid format configuration")?;

    if engine.requires_commits() {
        snapshot.commit_messages = ctx
            .github
            .list_commit_messages(&event.repository.full_name, snapshot.number)
            .await
            .context("Failed to list pull request commits")?;
    }

    let target = target(event);
    let outcome = engine.run(&snapshot);

    match outcome {
        FormatOutcome::Disabled => {
            info!("Skipping format due to format being disabled");
            Ok(Disposition::Disabled)
        }
        FormatOutcome::Passed => {
            info!("Format checks passed");
            ctx.reporter
                .commit_status(
                    &target,
                    CommitState::Success,
                    FORMAT_CHECK_NAME,
                    FORMAT_SUCCESS_DESCRIPTION,
                )
                .await
                .context("Failed to set format commit status")?;
            Ok(Disposition::Passed)
        }
        FormatOutcome::Failed(failures) => {
            let description = failures.status_description();
            info!(checks = %description, "Format checks failed");
            ctx.reporter
                .commit_status(&target, CommitState::Error, FORMAT_CHECK_NAME, &description)
                .await
                .context("Failed to set format commit status")?;
            ctx.reporter
                .comment(&target, &failures.comment_body())
                .await
                .context("Failed to post format comment")?;
            Ok(Disposition::Failed {
                checks: failures.check_names().into_iter().map(String::from).collect(),
            })
        }
    }
}
