//! Format compliance engine.
//!
//! Builds the active checks from the project configuration, runs them against
//! a pull request snapshot and aggregates the failures. Reporting the outcome
//! is left to the caller.

use std::collections::BTreeSet;

use tracing::debug;

use crate::checks::{Check, CommitMessagesCheck, DescriptionCheck, TitleCheck};
use crate::config::{FormatConfig, WildFlyConfig};
use crate::constants::failed_format_comment;
use crate::error::FormatError;
use crate::pull_request::PullRequestSnapshot;
use crate::rule::RegexDefinition;

/// Active checks for one evaluation, in title, commit, description order.
///
/// An engine built from a configuration with format checking turned off has
/// no checks and reports [`FormatOutcome::Disabled`].
#[derive(Debug, Clone)]
pub struct FormatEngine {
    enabled: bool,
    checks: Vec<Check>,
}

impl FormatEngine {
    /// Build the active checks.
    ///
    /// Nothing is compiled when format checking is disabled. Title and commit
    /// checks share the issue key pattern derived from the project key. The
    /// description check is added only when a description section exists.
    ///
    /// # Errors
    ///
    /// Returns an error if any configured pattern fails to compile or the
    /// description section has no rule list.
    pub fn from_config(config: &WildFlyConfig) -> Result<Self, FormatError> {
        if !config.format.enabled {
            return Ok(Self {
                enabled: false,
                checks: Vec::new(),
            });
        }
        Self::build(&config.format, &config.project_pattern())
    }

    fn build(format: &FormatConfig, project_pattern: &str) -> Result<Self, FormatError> {
        let mut checks = Vec::new();

        if format.title.enabled {
            let rule = RegexDefinition::new(project_pattern, format.title.message.clone())?;
            checks.push(TitleCheck::new(rule).into());
        }

        if format.commit.enabled {
            let rule = RegexDefinition::new(project_pattern, format.commit.message.clone())?;
            checks.push(CommitMessagesCheck::new(rule).into());
        }

        if let Some(description) = &format.description {
            checks.push(DescriptionCheck::from_config(Some(description))?.into());
        }

        Ok(Self {
            enabled: true,
            checks,
        })
    }

    #[must_use]
    pub fn checks(&self) -> &[Check] {
        &self.checks
    }

    /// Whether the snapshot needs its commit messages populated.
    #[must_use]
    pub fn requires_commits(&self) -> bool {
        self.checks
            .iter()
            .any(|check| matches!(check, Check::CommitMessages(_)))
    }

    /// Run every active check and collect the failures.
    #[must_use]
    pub fn run(&self, pull_request: &PullRequestSnapshot) -> FormatOutcome {
        if !self.enabled {
            return FormatOutcome::Disabled;
        }

        let mut failures = FormatFailures::default();

        for check in &self.checks {
            if let Some(message) = check.evaluate(pull_request) {
                debug!(check = check.name(), %message, "Format check failed");
                failures.push(check.name(), message);
            }
        }

        if failures.is_empty() {
            FormatOutcome::Passed
        } else {
            FormatOutcome::Failed(failures)
        }
    }
}

/// Verdict of one format evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatOutcome {
    /// Format checking is turned off for the project; nothing is reported.
    Disabled,
    Passed,
    Failed(FormatFailures),
}

/// Failure messages keyed by check name, in check registration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormatFailures {
    entries: Vec<(&'static str, String)>,
}

impl FormatFailures {
    fn push(&mut self, name: &'static str, message: String) {
        self.entries.push((name, message));
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Names of the failed checks.
    #[must_use]
    pub fn check_names(&self) -> BTreeSet<&'static str> {
        self.entries.iter().map(|(name, _)| *name).collect()
    }

    /// Failure messages in check order.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(_, message)| message.as_str())
    }

    /// Status line, e.g. `Failed checks: description, title`.
    #[must_use]
    pub fn status_description(&self) -> String {
        let names: Vec<&str> = self.check_names().into_iter().collect();
        format!("Failed checks: {}", names.join(", "))
    }

    /// Consolidated comment body, one bullet per message.
    #[must_use]
    pub fn comment_body(&self) -> String {
        let bullets: Vec<String> = self.messages().map(|message| format!("- {message}")).collect();
        failed_format_comment(&bullets.join("\n\n"))
    }
}
