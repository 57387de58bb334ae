//! Bot service binary.
//!
//! Standalone HTTP service handling GitHub pull request webhooks.

use anyhow::{Context, Result};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use bot::{reporter_for, server, BotContext, Config, GitHubClient};
use format::SkipDirectiveParser;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::default();

    let filter = EnvFilter::from_default_env()
        .add_directive("bot=info".parse()?)
        .add_directive("format=info".parse()?);
    let registry = tracing_subscriber::registry().with(filter);
    if config.json_logs {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }

    info!("Starting WildFly bot...");

    if config.github_token.is_none() {
        warn!("No GITHUB_TOKEN configured - GitHub API calls will be unauthenticated");
    }

    if config.dry_run {
        info!("Dry run enabled - no changes will be made on GitHub");
    }

    let github = GitHubClient::new(&config.github_api_url, config.github_token.as_deref())
        .context("Failed to create GitHub client")?;

    let ctx = BotContext {
        reporter: reporter_for(&github, config.dry_run),
        github,
        skip_parser: SkipDirectiveParser::new(&config.bot_mentions),
        config_path: config.config_path.clone(),
    };

    let app = server::build_router(ctx);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!(port = config.port, "WildFly bot listening");

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
