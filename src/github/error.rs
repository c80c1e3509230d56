// src/github/error.rs
// =============================================================================
// Everything that can go wrong while fetching a directory listing.
//
// Exactly one of these reaches the caller per failed fetch. None of them is
// ever turned into an empty listing.
// =============================================================================

use reqwest::StatusCode;
use thiserror::Error;

/// Errors returned by [`super::ContentsClient`].
#[derive(Error, Debug)]
pub enum FetchError {
    /// Owner or repository was empty; no request was sent
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No response was obtained (DNS, connect, TLS, timeout, broken body stream)
    #[error("Network error while requesting {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// A response arrived with a non-2xx status
    #[error(
        "Request to {url} failed with HTTP {status}{}",
        .message.as_ref().map(|m| format!(": {m}")).unwrap_or_default()
    )]
    Status {
        url: String,
        status: StatusCode,
        /// The `message` field of GitHub's error body, when there is one
        message: Option<String>,
    },

    /// The body was not a JSON array of listing entries
    #[error("Could not decode the listing returned by {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    /// The HTTP status for `Status` errors.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display_includes_remote_message() {
        let err = FetchError::Status {
            url: "https://api.github.com/repos/octo/gallery/contents/media".to_string(),
            status: StatusCode::NOT_FOUND,
            message: Some("Not Found".to_string()),
        };

        let text = err.to_string();
        assert!(text.contains("404"));
        assert!(text.ends_with(": Not Found"));
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    }

    #[test]
    fn test_status_display_without_message() {
        let err = FetchError::Status {
            url: "https://api.github.com/x".to_string(),
            status: StatusCode::BAD_GATEWAY,
            message: None,
        };

        assert!(err.to_string().ends_with("502 Bad Gateway"));
    }

    #[test]
    fn test_invalid_input_has_no_status() {
        let err = FetchError::InvalidInput("owner must not be empty".to_string());
        assert_eq!(err.status(), None);
    }
}
