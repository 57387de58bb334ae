//! GitHub REST client for the calls the bot needs.

use base64::Engine as _;
use format::BotConfigFile;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::{Method, RequestBuilder, Response, StatusCode, Url};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, instrument};

/// Page size used for list endpoints (GitHub maximum).
const PER_PAGE: usize = 100;

#[derive(Debug, Error)]
pub enum GitHubError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("GitHub API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Invalid URL: {0}")]
    Url(String),

    #[error("Failed to decode file contents: {0}")]
    Decode(String),

    #[error("Invalid configuration file: {0}")]
    Config(#[from] format::FormatError),
}

/// Commit status state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CommitState {
    Success,
    Error,
}

#[derive(Debug, Deserialize)]
struct CommitEntry {
    commit: CommitDetail,
}

#[derive(Debug, Deserialize)]
struct CommitDetail {
    message: String,
}

#[derive(Debug, Deserialize)]
struct ContentsResponse {
    content: String,
    #[serde(default)]
    encoding: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PullRequestState {
    #[serde(default)]
    mergeable: Option<bool>,
}

#[derive(Debug, Serialize)]
struct CreateStatusRequest<'a> {
    state: CommitState,
    context: &'a str,
    description: &'a str,
}

/// GitHub API client scoped to one installation token.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl GitHubClient {
    /// Create a new GitHub client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(base_url: &str, token: Option<&str>) -> Result<Self, GitHubError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static("2022-11-28"),
        );
        headers.insert(USER_AGENT, HeaderValue::from_static("wildfly-bot/1.0"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.map(str::to_string),
        })
    }

    /// Build an API URL from path segments, percent-encoding each segment.
    fn url(&self, segments: &[&str]) -> Result<Url, GitHubError> {
        let mut url = Url::parse(&self.base_url).map_err(|e| GitHubError::Url(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|()| GitHubError::Url(self.base_url.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let request = self.client.request(method, url);
        match &self.token {
            Some(token) => request.header(AUTHORIZATION, format!("Bearer {token}")),
            None => request,
        }
    }

    /// Turn a non-success response into [`GitHubError::Api`].
    async fn check(response: Response) -> Result<Response, GitHubError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response.text().await.unwrap_or_default();
        Err(GitHubError::Api {
            status: status.as_u16(),
            message,
        })
    }

    /// Commit messages of a pull request, in commit order.
    ///
    /// # Errors
    ///
    /// Returns an error if the API call fails.
    #[instrument(skip(self))]
    pub async fn list_commit_messages(
        &self,
        repo: &str,
        number: u64,
    ) -> Result<Vec<String>, GitHubError> {
        let (owner, name) = split_repo(repo)?;
        let number = number.to_string();
        let mut messages = Vec::new();

        for page in 1.. {
            let mut url = self.url(&["repos", owner, name, "pulls", &number, "commits"])?;
            url.query_pairs_mut()
                .append_pair("per_page", &PER_PAGE.to_string())
                .append_pair("page", &page.to_string());

            let response = Self::check(self.request(Method::GET, url).send().await?).await?;
            let commits: Vec<CommitEntry> = response.json().await?;
            let count = commits.len();
            messages.extend(commits.into_iter().map(|entry| entry.commit.message));

            if count < PER_PAGE {
                break;
            }
        }

        debug!(count = messages.len(), "Retrieved commit messages");
        Ok(messages)
    }

    /// Current mergeability of a pull request.
    ///
    /// # Errors
    ///
    /// Returns an error if the API call fails.
    #[instrument(skip(self))]
    pub async fn pull_request_mergeable(
        &self,
        repo: &str,
        number: u64,
    ) -> Result<Option<bool>, GitHubError> {
        let (owner, name) = split_repo(repo)?;
        let url = self.url(&["repos", owner, name, "pulls", &number.to_string()])?;

        let response = Self::check(self.request(Method::GET, url).send().await?).await?;
        let state: PullRequestState = response.json().await?;
        Ok(state.mergeable)
    }

    /// Fetch and parse the project configuration file from the default branch.
    ///
    /// Returns `None` if the repository has no such file.
    ///
    /// # Errors
    ///
    /// Returns an error if the API call fails or the file is not valid.
    #[instrument(skip(self))]
    pub async fn fetch_config_file(
        &self,
        repo: &str,
        path: &str,
    ) -> Result<Option<BotConfigFile>, GitHubError> {
        let (owner, name) = split_repo(repo)?;
        let mut segments = vec!["repos", owner, name, "contents"];
        segments.extend(path.split('/').filter(|s| !s.is_empty()));
        let url = self.url(&segments)?;

        let response = self.request(Method::GET, url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            debug!("Configuration file not found");
            return Ok(None);
        }

        let contents: ContentsResponse = Self::check(response).await?.json().await?;
        let text = decode_contents(&contents)?;
        Ok(Some(BotConfigFile::from_yaml(&text)?))
    }

    /// Set a commit status on `sha`.
    ///
    /// # Errors
    ///
    /// Returns an error if the API call fails.
    #[instrument(skip(self))]
    pub async fn create_commit_status(
        &self,
        repo: &str,
        sha: &str,
        state: CommitState,
        context: &str,
        description: &str,
    ) -> Result<(), GitHubError> {
        let (owner, name) = split_repo(repo)?;
        let url = self.url(&["repos", owner, name, "statuses", sha])?;
        let request = CreateStatusRequest {
            state,
            context,
            description,
        };

        Self::check(self.request(Method::POST, url).json(&request).send().await?).await?;
        info!(?state, "Commit status created");
        Ok(())
    }

    /// Post a comment on a pull request.
    ///
    /// # Errors
    ///
    /// Returns an error if the API call fails.
    #[instrument(skip(self, body))]
    pub async fn create_comment(&self, repo: &str, number: u64, body: &str) -> Result<(), GitHubError> {
        let (owner, name) = split_repo(repo)?;
        let url = self.url(&["repos", owner, name, "issues", &number.to_string(), "comments"])?;

        Self::check(
            self.request(Method::POST, url)
                .json(&serde_json::json!({ "body": body }))
                .send()
                .await?,
        )
        .await?;
        info!("Comment posted");
        Ok(())
    }

    /// Add labels to a pull request. Adding a present label is a no-op on GitHub.
    ///
    /// # Errors
    ///
    /// Returns an error if the API call fails.
    #[instrument(skip(self))]
    pub async fn add_labels(&self, repo: &str, number: u64, labels: &[String]) -> Result<(), GitHubError> {
        if labels.is_empty() {
            return Ok(());
        }

        let (owner, name) = split_repo(repo)?;
        let url = self.url(&["repos", owner, name, "issues", &number.to_string(), "labels"])?;

        Self::check(
            self.request(Method::POST, url)
                .json(&serde_json::json!({ "labels": labels }))
                .send()
                .await?,
        )
        .await?;
        info!(count = labels.len(), "Labels added");
        Ok(())
    }

    /// Remove a label from a pull request.
    ///
    /// # Errors
    ///
    /// Returns an error if the API call fails for any reason other than the
    /// label not being present.
    #[instrument(skip(self))]
    pub async fn remove_label(&self, repo: &str, number: u64, label: &str) -> Result<(), GitHubError> {
        let (owner, name) = split_repo(repo)?;
        let url = self.url(&["repos", owner, name, "issues", &number.to_string(), "labels", label])?;

        let response = self.request(Method::DELETE, url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            debug!("Label not present (already removed)");
            return Ok(());
        }

        Self::check(response).await?;
        debug!("Label removed");
        Ok(())
    }
}

fn split_repo(repo: &str) -> Result<(&str, &str), GitHubError> {
    match repo.split_once('/') {
        Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/') => {
            Ok((owner, name))
        }
        _ => Err(GitHubError::Url(format!(
            "invalid repository '{repo}' (expected owner/repo)"
        ))),
    }
}

fn decode_contents(contents: &ContentsResponse) -> Result<String, GitHubError> {
    match contents.encoding.as_deref() {
        Some("base64") | None => {
            let cleaned: String = contents
                .content
                .chars()
                .filter(|c| !c.is_whitespace())
                .collect();
            let bytes = base64::engine::general_purpose::STANDARD
                .decode(cleaned)
                .map_err(|e| GitHubError::Decode(e.to_string()))?;
            String::from_utf8(bytes).map_err(|e| GitHubError::Decode(e.to_string()))
        }
        Some(other) => Err(GitHubError::Decode(format!("unsupported encoding '{other}'"))),
    }
}
