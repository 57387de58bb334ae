//! GitHub webhook payload types.

use format::{Mergeable, PullRequestSnapshot};
use serde::Deserialize;

/// GitHub PR event payload, reduced to the fields the processors read
#[derive(Debug, Clone, Deserialize)]
pub struct PullRequestEvent {
    /// Action type (opened, edited, synchronize, ...)
    pub action: String,
    /// Pull request details
    pub pull_request: PullRequest,
    /// Repository info
    pub repository: Repository,
}

/// GitHub Pull Request
#[derive(Debug, Clone, Deserialize)]
pub struct PullRequest {
    /// PR number
    pub number: u64,
    /// PR title
    pub title: String,
    /// PR body/description
    #[serde(default)]
    pub body: Option<String>,
    /// Source branch head, target of the commit status
    pub head: GitRef,
    /// Author
    pub user: GitHubUser,
    /// Whether the PR is a draft
    #[serde(default)]
    pub draft: bool,
    /// Mergeability, `null` while GitHub is computing it
    #[serde(default)]
    pub mergeable: Option<bool>,
}

impl PullRequest {
    /// Snapshot for the format engine. Commit messages are filled in later,
    /// and only when a commit check is active.
    #[must_use]
    pub fn snapshot(&self) -> PullRequestSnapshot {
        PullRequestSnapshot {
            number: self.number,
            title: self.title.clone(),
            body: self.body.clone(),
            draft: self.draft,
            mergeable: Mergeable::from(self.mergeable),
            author: self.user.login.clone(),
            commit_messages: Vec::new(),
        }
    }
}

/// Git reference
#[derive(Debug, Clone, Deserialize)]
pub struct GitRef {
    /// SHA
    pub sha: String,
}

/// GitHub Repository
#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
    /// Full name (org/repo)
    pub full_name: String,
}

/// GitHub User
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubUser {
    /// User login
    pub login: String,
}
