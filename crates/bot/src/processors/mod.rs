//! Pull request event processors.
//!
//! Each processor recomputes its state from the event snapshot; nothing is
//! carried over between deliveries.

mod dependabot;
mod format_check;
mod labels;

pub use dependabot::post_dependabot_info;
pub use format_check::check_format;
pub use labels::update_labels;

use std::sync::Arc;

use format::SkipDirectiveParser;
use serde::Serialize;

use crate::github::{GitHubClient, PullRequestEvent};
use crate::reporter::{PullRequestTarget, Reporter};

/// Collaborators shared by the processors.
#[derive(Clone)]
pub struct BotContext {
    /// Read access to GitHub (commits, config file, mergeability)
    pub github: GitHubClient,
    /// Mutations (statuses, comments, labels)
    pub reporter: Arc<dyn Reporter>,
    /// Skip gate
    pub skip_parser: SkipDirectiveParser,
    /// Path of the project configuration file
    pub config_path: String,
}

/// What a processor did with an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Disposition {
    /// Skip directive or draft
    Skipped { reason: String },
    /// Repository has no configuration file
    Unconfigured,
    /// Format checking disabled for the project
    Disabled,
    /// All checks passed
    Passed,
    /// One or more checks failed
    Failed { checks: Vec<String> },
    /// Labels updated
    Labelled { add: Vec<String>, remove: Vec<String> },
    /// Informational comment posted
    Commented,
    /// Nothing to do for this pull request
    NotApplicable,
}

pub(crate) fn target(event: &PullRequestEvent) -> PullRequestTarget {
    PullRequestTarget {
        repo: event.repository.full_name.clone(),
        number: event.pull_request.number,
        head_sha: event.pull_request.head.sha.clone(),
    }
}
