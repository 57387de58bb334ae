//! Snapshot of the pull request attributes the checks look at.

/// Mergeability as reported by GitHub.
///
/// GitHub computes mergeability in the background and reports `null` until it
/// is done, hence the third state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mergeable {
    Yes,
    No,
    #[default]
    Unknown,
}

impl From<Option<bool>> for Mergeable {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(true) => Self::Yes,
            Some(false) => Self::No,
            None => Self::Unknown,
        }
    }
}

/// Point-in-time view of a pull request, built fresh for every delivery.
#[derive(Debug, Clone, Default)]
pub struct PullRequestSnapshot {
    /// PR number
    pub number: u64,
    /// PR title
    pub title: String,
    /// PR body, `None` when the description was left empty
    pub body: Option<String>,
    /// Whether the PR is a draft
    pub draft: bool,
    /// Mergeability of the head against the base
    pub mergeable: Mergeable,
    /// Login of the PR author
    pub author: String,
    /// Commit messages in commit order. Only populated when a commit check runs.
    pub commit_messages: Vec<String>,
}

impl PullRequestSnapshot {
    /// Body text with an absent description normalized to the empty string.
    #[must_use]
    pub fn body_text(&self) -> &str {
        self.body.as_deref().unwrap_or_default()
    }
}
