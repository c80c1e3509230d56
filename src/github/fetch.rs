// src/github/fetch.rs
// =============================================================================
// This module fetches one directory listing from the GitHub contents API.
//
// Strategy:
// - Build `{api_base}/repos/{owner}/{repo}/contents/{path}` (optionally with
//   `?ref=<branch or sha>`)
// - Send a single GET, no retries
// - Read the whole body, then decide: non-2xx -> Status, bad JSON -> Decode
//
// The HTTP client is owned by a `ContentsClient` value that the caller
// constructs and passes around. There is no shared global client, so tests
// can point a client at a local server.
//
// Rust concepts:
// - async functions: For network I/O
// - Result with a custom error enum: Callers can match on the failure kind
// - url::Url: Percent-encodes each path segment for us
// =============================================================================

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, ClientBuilder};
use serde::Deserialize;
use tracing::{debug, warn};
use url::Url;

use super::entry::RepoEntry;
use super::error::FetchError;
use crate::config::FetchConfig;

const GITHUB_JSON: &str = "application/vnd.github+json";

// GitHub error bodies look like {"message": "Not Found", "documentation_url": "..."}
#[derive(Deserialize)]
struct RemoteErrorBody {
    message: String,
}

/// Fetches directory listings from one contents API endpoint.
#[derive(Debug, Clone)]
pub struct ContentsClient {
    http: Client,
    api_base: Url,
}

impl ContentsClient {
    /// Builds a client with the timeout and User-Agent from `config`.
    pub fn new(config: &FetchConfig) -> Result<Self, reqwest::Error> {
        let http = client_builder(config).build()?;
        Ok(Self::with_client(http, config.api_base.clone()))
    }

    /// Wraps an existing reqwest client.
    pub fn with_client(http: Client, api_base: Url) -> Self {
        Self { http, api_base }
    }

    /// Lists `path` in `owner/repo` on the default branch.
    ///
    /// An empty `path` lists the repository root.
    pub async fn fetch(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
    ) -> Result<Vec<RepoEntry>, FetchError> {
        self.fetch_at(owner, repo, path, None).await
    }

    /// Lists `path` in `owner/repo` at `git_ref` (branch, tag or commit).
    ///
    /// Entries come back in the order the API returned them.
    pub async fn fetch_at(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        git_ref: Option<&str>,
    ) -> Result<Vec<RepoEntry>, FetchError> {
        if owner.trim().is_empty() {
            return Err(FetchError::InvalidInput(
                "repository owner must not be empty".to_string(),
            ));
        }
        if repo.trim().is_empty() {
            return Err(FetchError::InvalidInput(
                "repository name must not be empty".to_string(),
            ));
        }

        let url = self.listing_url(owner, repo, path, git_ref)?;
        debug!(%url, "requesting directory listing");

        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|source| network_error(&url, source))?;

        let status = response.status();

        if !status.is_success() {
            // The status is already known; a broken error body only costs us the message
            let message = response
                .bytes()
                .await
                .ok()
                .and_then(|body| serde_json::from_slice::<RemoteErrorBody>(&body).ok())
                .map(|b| b.message);
            warn!(%url, %status, message = message.as_deref().unwrap_or(""), "listing request rejected");
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
                message,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| network_error(&url, source))?;

        let entries: Vec<RepoEntry> = serde_json::from_slice(&body).map_err(|source| {
            warn!(%url, error = %source, "listing body is not a JSON array of entries");
            FetchError::Decode {
                url: url.to_string(),
                source,
            }
        })?;

        debug!(%url, count = entries.len(), "directory listing decoded");
        Ok(entries)
    }

    /// Builds the contents API URL for a directory.
    ///
    /// Every path segment is percent-encoded; empty segments (leading,
    /// trailing or doubled slashes) are dropped. `.` and `..` are rejected
    /// anywhere, since the URL would otherwise resolve them to another
    /// resource.
    pub fn listing_url(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        git_ref: Option<&str>,
    ) -> Result<Url, FetchError> {
        check_segment("repository owner", owner)?;
        check_segment("repository name", repo)?;
        for segment in path.split('/') {
            check_segment("path", segment)?;
        }

        let mut url = self.api_base.clone();

        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                FetchError::InvalidInput(format!(
                    "API base URL cannot carry a path: {}",
                    self.api_base
                ))
            })?;
            segments
                .pop_if_empty()
                .extend(["repos", owner, repo, "contents"])
                .extend(path.split('/').filter(|s| !s.is_empty()));
        }

        if let Some(git_ref) = git_ref {
            url.query_pairs_mut().append_pair("ref", git_ref);
        }

        Ok(url)
    }
}

// Shared builder so tests can tweak it (e.g. disable proxies) before building
pub(crate) fn client_builder(config: &FetchConfig) -> ClientBuilder {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_JSON));

    Client::builder()
        .timeout(config.timeout)
        .user_agent(config.user_agent.clone())
        .default_headers(headers)
}

fn check_segment(what: &str, segment: &str) -> Result<(), FetchError> {
    if segment == "." || segment == ".." {
        return Err(FetchError::InvalidInput(format!(
            "{} must not contain '.' or '..' segments",
            what
        )));
    }
    Ok(())
}

fn network_error(url: &Url, source: reqwest::Error) -> FetchError {
    warn!(%url, error = %source, timeout = source.is_timeout(), "listing request failed");
    FetchError::Network {
        url: url.to_string(),
        source,
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why does fetch_at still read the body of a failed request?
//    - A 404 from GitHub has a JSON body with a "message" field
//    - We keep that message so the error tells the user what went wrong
//    - If that body can't be read we still report the status we got
//
// 2. What is path_segments_mut()?
//    - It gives mutable access to the URL path as a list of segments
//    - Each pushed segment is percent-encoded ("my photos" -> "my%20photos")
//    - pop_if_empty() removes the empty segment left by a trailing '/'
//
// 3. Why the extra { ... } block in listing_url?
//    - `segments` borrows `url` mutably
//    - The block ends that borrow before we touch the query string
// -----------------------------------------------------------------------------
