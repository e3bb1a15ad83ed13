use reqwest::StatusCode;
use thiserror::Error;

/// Failures surfaced by the GitHub REST client.
///
/// The only variant callers branch on is `NotFound` (unknown username);
/// everything else is reported to the user as a generic failure carrying
/// the underlying detail.
#[derive(Debug, Error)]
pub enum GithubError {
    #[error("resource not found")]
    NotFound,

    #[error("GitHub API returned {status}: {message}")]
    Api { status: StatusCode, message: String },

    #[error("GitHub API request failed: {0}")]
    Http(#[from] reqwest::Error),
}

impl GithubError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, GithubError::NotFound)
    }
}
