//! Field checks run by the format engine.

mod commit;
mod description;
mod title;

pub use commit::CommitMessagesCheck;
pub use description::{DescriptionCheck, DescriptionRuleSet};
pub use title::TitleCheck;

use crate::pull_request::PullRequestSnapshot;

/// One of the fixed set of checks.
#[derive(Debug, Clone)]
pub enum Check {
    Title(TitleCheck),
    CommitMessages(CommitMessagesCheck),
    Description(DescriptionCheck),
}

impl Check {
    /// Name reported in the commit status line.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Title(_) => TitleCheck::NAME,
            Self::CommitMessages(_) => CommitMessagesCheck::NAME,
            Self::Description(_) => DescriptionCheck::NAME,
        }
    }

    /// Evaluate the check, returning the failure message if it does not pass.
    #[must_use]
    pub fn evaluate(&self, pull_request: &PullRequestSnapshot) -> Option<String> {
        match self {
            Self::Title(check) => check.evaluate(&pull_request.title),
            Self::CommitMessages(check) => check.evaluate(&pull_request.commit_messages),
            Self::Description(check) => check.evaluate(pull_request.body.as_deref()),
        }
    }
}

impl From<TitleCheck> for Check {
    fn from(check: TitleCheck) -> Self {
        Self::Title(check)
    }
}

impl From<CommitMessagesCheck> for Check {
    fn from(check: CommitMessagesCheck) -> Self {
        Self::CommitMessages(check)
    }
}

impl From<DescriptionCheck> for Check {
    fn from(check: DescriptionCheck) -> Self {
        Self::Description(check)
    }
}
