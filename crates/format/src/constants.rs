//! Runtime constants shared by the engine and the bot.

/// Location of the per-repository configuration file.
pub const CONFIG_FILE_NAME: &str = ".github/wildfly-bot.yml";

pub const DEFAULT_PROJECT_KEY: &str = "WFLY";

/// Label that is cleared on every synchronize/reopen.
pub const LABEL_FIX_ME: &str = "fix-me";

/// Label carried while the pull request cannot be merged cleanly.
pub const LABEL_NEEDS_REBASE: &str = "needs-rebase";

/// Login of the dependency update bot.
pub const DEPENDABOT: &str = "dependabot[bot]";

/// Commit status context used for the format verdict.
pub const FORMAT_CHECK_NAME: &str = "Format";

pub const FORMAT_SUCCESS_DESCRIPTION: &str = "Valid";

pub const DEFAULT_DESCRIPTION_MESSAGE: &str = "Invalid description content";

/// Phrase that must follow a bot mention to form a skip directive.
pub const SKIP_FORMAT_PHRASE: &str = "skip format";

/// Mentions of the bot's own identities, fork deployments included.
pub const DEFAULT_BOT_MENTIONS: &[&str] = &["@wildfly-bot[bot]", "@wildfly-github-bot-fork[bot]"];

pub const DRY_RUN_PREFIX: &str = "DRY_RUN";

pub const NULL_ARGUMENT_MESSAGE: &str = "Input argument cannot be null";

/// Issue key pattern for a project key, e.g. `WFLY-\d+`.
#[must_use]
pub fn project_pattern(project_key: &str) -> String {
    format!(r"{project_key}-\d+")
}

#[must_use]
pub fn default_title_message(pattern: &str) -> String {
    format!("Wrong content of the title. It does not satisfy the following regex pattern: [{pattern}]")
}

#[must_use]
pub fn default_commit_message(pattern: &str) -> String {
    format!("None of the commit messages satisfy the following regex pattern: [{pattern}]")
}

/// Consolidated comment posted when one or more checks fail.
#[must_use]
pub fn failed_format_comment(failures: &str) -> String {
    format!(
        "Failed format check on this pull request:\n\n{failures}\n\nPlease fix the format according to these guidelines.\n"
    )
}

/// Informational comment posted on pull requests opened by dependabot.
#[must_use]
pub fn dependabot_comment(project_key: &str) -> String {
    format!(
        "WildFly Bot recognized this PR as dependabot dependency update. Please create a {project_key} issue and add new comment containing this JIRA link please."
    )
}
