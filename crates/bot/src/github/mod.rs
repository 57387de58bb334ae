//! GitHub integration: REST client and webhook payload types.

mod client;
mod webhooks;

pub use client::{CommitState, GitHubClient, GitHubError};
pub use webhooks::{GitHubUser, GitRef, PullRequest, PullRequestEvent, Repository};
