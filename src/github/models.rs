use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::github::pagination::has_next_page;

/// A GitHub user profile, fetched once per submitted username.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub login: String,
    pub avatar_url: String,
    pub html_url: String,
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct License {
    pub name: String,
}

/// A public repository as returned by the REST v3 API. Immutable
/// snapshot; only ever appended to or replaced, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub html_url: String,
    pub language: Option<String>,
    #[serde(default)]
    pub stargazers_count: u32,
    #[serde(default)]
    pub forks_count: u32,
    pub license: Option<License>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// One page of a user's repositories plus the raw `Link` response
/// header, which is the sole continuation signal.
#[derive(Debug, Clone)]
pub struct RepoPage {
    pub items: Vec<Repository>,
    pub link: Option<String>,
}

impl RepoPage {
    pub fn has_more(&self) -> bool {
        self.link.as_deref().is_some_and(has_next_page)
    }
}

/// Envelope of the `/search/repositories` endpoint. Filtered searches
/// read a single page, so no continuation signal is kept here.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResults {
    pub total_count: u64,
    pub items: Vec<Repository>,
}
