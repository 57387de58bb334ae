//! Notice for pull requests opened by dependabot.

use anyhow::{Context, Result};
use format::constants::{dependabot_comment, DEPENDABOT};
use tracing::{info, instrument};

use super::{target, BotContext, Disposition};
use crate::github::PullRequestEvent;

/// Ask for a tracker issue on dependabot pull requests.
///
/// Runs independently of the format check on the same event.
///
/// # Errors
///
/// Returns an error when the configuration cannot be loaded or the comment
/// cannot be posted.
#[instrument(skip_all, fields(repo = %event.repository.full_name, pr_number = event.pull_request.number))]
pub async fn post_dependabot_info(ctx: &BotContext, event: &PullRequestEvent) -> Result<Disposition> {
    if event.pull_request.user.login != DEPENDABOT {
        return Ok(Disposition::NotApplicable);
    }

    info!("Dependabot detected.");

    let config = ctx
        .github
        .fetch_config_file(&event.repository.full_name, &ctx.config_path)
        .await
        .context("Failed to load configuration file")?
        .unwrap_or_default();

    ctx.reporter
        .comment(&target(event), &dependabot_comment(&config.wildfly.project_key))
        .await
        .context("Failed to post dependabot comment")?;

    Ok(Disposition::Commented)
}
