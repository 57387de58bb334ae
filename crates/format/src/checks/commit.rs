use crate::constants::default_commit_message;
use crate::rule::RegexDefinition;

/// Requires at least one commit message to reference an issue key.
///
/// Only one commit needs the reference so that fixup commits can be pushed
/// and squashed later.
#[derive(Debug, Clone)]
pub struct CommitMessagesCheck {
    rule: RegexDefinition,
}

impl CommitMessagesCheck {
    pub const NAME: &'static str = "commit";

    #[must_use]
    pub fn new(rule: RegexDefinition) -> Self {
        Self { rule }
    }

    /// Passes iff any message matches; an empty commit list fails.
    #[must_use]
    pub fn evaluate<S: AsRef<str>>(&self, messages: &[S]) -> Option<String> {
        if messages.iter().any(|message| self.rule.is_match(message.as_ref())) {
            None
        } else {
            Some(self.rule.message_or_else(default_commit_message))
        }
    }
}
