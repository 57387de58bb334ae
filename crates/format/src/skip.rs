//! Skip gate for pull requests that must not be checked or labelled.
//!
//! A maintainer opts a PR out by writing one of the bot mentions followed by
//! `skip format` anywhere in the description, e.g.
//! `@wildfly-bot[bot] skip format`. Drafts are skipped as well.

use std::fmt;

use crate::constants::{DEFAULT_BOT_MENTIONS, SKIP_FORMAT_PHRASE};
use crate::pull_request::PullRequestSnapshot;

/// Why a pull request is skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Description contains a skip directive
    Directive,
    /// Pull request is a draft
    Draft,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Directive => write!(f, "skip format directive in pull request description"),
            Self::Draft => write!(f, "pull request being a draft"),
        }
    }
}

/// Literal substring search for `<mention> skip format`.
#[derive(Debug, Clone)]
pub struct SkipDirectiveParser {
    directives: Vec<String>,
}

impl Default for SkipDirectiveParser {
    fn default() -> Self {
        Self::new(DEFAULT_BOT_MENTIONS.iter().copied())
    }
}

impl SkipDirectiveParser {
    /// Build a parser recognizing the given bot mentions (e.g. `@wildfly-bot[bot]`).
    pub fn new<I, S>(mentions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let directives = mentions
            .into_iter()
            .map(|mention| format!("{} {SKIP_FORMAT_PHRASE}", mention.as_ref()))
            .collect();
        Self { directives }
    }

    /// Whether `body` carries a skip directive. Case sensitive.
    #[must_use]
    pub fn has_directive(&self, body: &str) -> bool {
        self.directives.iter().any(|directive| body.contains(directive.as_str()))
    }

    /// First applicable skip reason, directive before draft.
    #[must_use]
    pub fn skip_reason(&self, pull_request: &PullRequestSnapshot) -> Option<SkipReason> {
        if self.has_directive(pull_request.body_text()) {
            Some(SkipReason::Directive)
        } else if pull_request.draft {
            Some(SkipReason::Draft)
        } else {
            None
        }
    }
}
