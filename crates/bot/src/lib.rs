//! GitHub webhook service for pull request hygiene.
//!
//! This crate provides:
//! - Webhook payload types and a GitHub REST client
//! - Live and dry-run reporters for statuses, comments and labels
//! - Processors for the format check, label update and dependabot notice
//! - HTTP server for webhook handling

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod config;
pub mod github;
pub mod processors;
pub mod reporter;
pub mod server;

pub use config::Config;
pub use github::{GitHubClient, GitHubError};
pub use processors::{BotContext, Disposition};
pub use reporter::{reporter_for, DryRunReporter, GitHubReporter, PullRequestTarget, Reporter};
