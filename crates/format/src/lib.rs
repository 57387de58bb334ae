//! Format compliance engine for pull requests.
//!
//! This crate provides:
//! - Typed model of the per-repository `wildfly-bot.yml` configuration
//! - Pattern rules (`RegexDefinition`) and the title, commit and description checks
//! - The skip directive parser shared by the format and label processors
//! - The format engine that aggregates check failures into a single verdict
//! - The label decision for mergeability labels
//!
//! Nothing in here performs I/O; the `bot` crate feeds pull request snapshots
//! in and carries the verdicts out to GitHub.

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod checks;
pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod labels;
pub mod pull_request;
pub mod rule;
pub mod skip;

pub use checks::{Check, CommitMessagesCheck, DescriptionCheck, DescriptionRuleSet, TitleCheck};
pub use config::{BotConfigFile, DescriptionConfig, FieldConfig, FormatConfig, RegexConfig, WildFlyConfig};
pub use engine::{FormatEngine, FormatFailures, FormatOutcome};
pub use error::FormatError;
pub use labels::{decide_labels, LabelUpdate};
pub use pull_request::{Mergeable, PullRequestSnapshot};
pub use rule::RegexDefinition;
pub use skip::{SkipDirectiveParser, SkipReason};
