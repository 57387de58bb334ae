//! Reporting collaborators: everything that mutates GitHub state.
//!
//! Processors talk to a [`Reporter`] so that dry-run mode can swap the live
//! GitHub implementation for one that only logs.

use std::sync::Arc;

use async_trait::async_trait;
use format::constants::DRY_RUN_PREFIX;
use format::LabelUpdate;
use tracing::info;

use crate::github::{CommitState, GitHubClient, GitHubError};

/// The pull request a report is about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestTarget {
    /// Repository full name (owner/repo)
    pub repo: String,
    /// PR number
    pub number: u64,
    /// Head commit SHA, where commit statuses go
    pub head_sha: String,
}

/// Sink for statuses, comments and label updates.
#[async_trait]
pub trait Reporter: Send + Sync {
    /// Set a named commit status on the head commit.
    async fn commit_status(
        &self,
        target: &PullRequestTarget,
        state: CommitState,
        context: &str,
        description: &str,
    ) -> Result<(), GitHubError>;

    /// Post a comment on the pull request.
    async fn comment(&self, target: &PullRequestTarget, body: &str) -> Result<(), GitHubError>;

    /// Apply a batched label update.
    async fn update_labels(
        &self,
        target: &PullRequestTarget,
        update: &LabelUpdate,
    ) -> Result<(), GitHubError>;
}

/// Reporter backed by the GitHub API.
#[derive(Debug, Clone)]
pub struct GitHubReporter {
    client: GitHubClient,
}

impl GitHubReporter {
    #[must_use]
    pub fn new(client: GitHubClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Reporter for GitHubReporter {
    async fn commit_status(
        &self,
        target: &PullRequestTarget,
        state: CommitState,
        context: &str,
        description: &str,
    ) -> Result<(), GitHubError> {
        self.client
            .create_commit_status(&target.repo, &target.head_sha, state, context, description)
            .await
    }

    async fn comment(&self, target: &PullRequestTarget, body: &str) -> Result<(), GitHubError> {
        self.client.create_comment(&target.repo, target.number, body).await
    }

    async fn update_labels(
        &self,
        target: &PullRequestTarget,
        update: &LabelUpdate,
    ) -> Result<(), GitHubError> {
        self.client
            .add_labels(&target.repo, target.number, &update.add)
            .await?;
        for label in &update.remove {
            self.client
                .remove_label(&target.repo, target.number, label)
                .await?;
        }
        Ok(())
    }
}

/// Reporter that logs what it would have done.
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunReporter;

#[async_trait]
impl Reporter for DryRunReporter {
    async fn commit_status(
        &self,
        target: &PullRequestTarget,
        state: CommitState,
        context: &str,
        description: &str,
    ) -> Result<(), GitHubError> {
        info!(
            repo = %target.repo,
            pr_number = target.number,
            "{DRY_RUN_PREFIX} Commit status {state:?} for {context}: {description}"
        );
        Ok(())
    }

    async fn comment(&self, target: &PullRequestTarget, body: &str) -> Result<(), GitHubError> {
        info!(
            repo = %target.repo,
            pr_number = target.number,
            "{DRY_RUN_PREFIX} Add new comment {body}"
        );
        Ok(())
    }

    async fn update_labels(
        &self,
        target: &PullRequestTarget,
        update: &LabelUpdate,
    ) -> Result<(), GitHubError> {
        info!(
            repo = %target.repo,
            pr_number = target.number,
            "{DRY_RUN_PREFIX} Update labels, add {:?}, remove {:?}",
            update.add,
            update.remove
        );
        Ok(())
    }
}

/// Pick the reporter for the configured mode.
#[must_use]
pub fn reporter_for(client: &GitHubClient, dry_run: bool) -> Arc<dyn Reporter> {
    if dry_run {
        Arc::new(DryRunReporter)
    } else {
        Arc::new(GitHubReporter::new(client.clone()))
    }
}
