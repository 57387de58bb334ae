//! Configuration for the bot service.

use std::env;

use format::constants::{CONFIG_FILE_NAME, DEFAULT_BOT_MENTIONS};

const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

/// Service configuration, read from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port.
    pub port: u16,
    /// GitHub token for API calls.
    pub github_token: Option<String>,
    /// GitHub API base URL (overridable for GitHub Enterprise and tests).
    pub github_api_url: String,
    /// Log mutations instead of performing them.
    pub dry_run: bool,
    /// Path of the project configuration file inside the repository.
    pub config_path: String,
    /// Bot mentions recognized in skip directives.
    pub bot_mentions: Vec<String>,
    /// Emit JSON formatted logs.
    pub json_logs: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(8080),
            github_token: env::var("GITHUB_TOKEN").ok().filter(|s| !s.is_empty()),
            github_api_url: env::var("GITHUB_API_URL")
                .ok()
                .filter(|s| !s.is_empty())
                .map_or_else(|| DEFAULT_GITHUB_API_URL.to_string(), |s| s.trim_end_matches('/').to_string()),
            dry_run: env::var("BOT_DRY_RUN")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
            config_path: env::var("BOT_CONFIG_PATH").unwrap_or_else(|_| CONFIG_FILE_NAME.to_string()),
            bot_mentions: env::var("BOT_MENTIONS")
                .ok()
                .map(|s| {
                    s.split(',')
                        .map(|m| m.trim().to_string())
                        .filter(|m| !m.is_empty())
                        .collect()
                })
                .unwrap_or_else(|| DEFAULT_BOT_MENTIONS.iter().map(|m| (*m).to_string()).collect()),
            json_logs: env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json")),
        }
    }
}
