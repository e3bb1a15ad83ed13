use futures::Stream;
use reqwest::{Client, Response, StatusCode, header::LINK};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::error::GithubError;
use super::models::{RepoPage, Repository, SearchResults, User};

/// Page size for the browse list. Small enough that "load more" fires a
/// few times for a typical account.
pub const BROWSE_PAGE_SIZE: u32 = 15;

/// Page size for the language walk, which has to traverse the entire
/// repository set and should do so in as few requests as possible.
pub const LANGUAGE_WALK_PAGE_SIZE: u32 = 100;

/// Unauthenticated GitHub REST v3 client. Constructed once and passed to
/// whoever needs it; cheap to clone.
#[derive(Clone)]
pub struct GithubClient {
    client: Client,
    api_url: String,
}

impl GithubClient {
    pub fn new(api_url: &str) -> Result<Self, GithubError> {
        let client = Client::builder()
            .user_agent("repolens")
            .build()?;

        Ok(Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get(&self, route: &str) -> Result<Response, GithubError> {
        let url = format!("{}{}", self.api_url, route);
        let resp = self.client.get(&url).send().await?;

        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            return Err(GithubError::NotFound);
        }
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(GithubError::Api { status, message });
        }

        Ok(resp)
    }

    async fn get_json<T: DeserializeOwned>(&self, route: &str) -> Result<T, GithubError> {
        Ok(self.get(route).await?.json().await?)
    }

    /// Fetch a user's public profile.
    pub async fn get_user(&self, username: &str) -> Result<User, GithubError> {
        let user: User = self.get_json(&format!("/users/{}", username)).await?;
        debug!(login = %user.login, "Fetched user profile");
        Ok(user)
    }

    /// Fetch one page of a user's public repositories, together with the
    /// `Link` header that signals whether another page exists.
    pub async fn get_repositories(
        &self,
        username: &str,
        page: u32,
        per_page: u32,
    ) -> Result<RepoPage, GithubError> {
        let route = format!(
            "/users/{}/repos?per_page={}&page={}",
            username, per_page, page
        );
        let resp = self.get(&route).await?;

        let link = resp
            .headers()
            .get(LINK)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let items: Vec<Repository> = resp.json().await?;
        debug!(user = username, page, count = items.len(), "Fetched repo page");

        Ok(RepoPage { items, link })
    }

    /// Run a repository search with a pre-built query (see
    /// [`crate::github::queries::build_search_query`]). Only the first
    /// page of results is returned.
    pub async fn search_repositories(&self, query: &str) -> Result<SearchResults, GithubError> {
        let url = format!("{}/search/repositories", self.api_url);
        let resp = self
            .client
            .get(&url)
            .query(&[("q", query), ("per_page", "100")])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(GithubError::Api { status, message });
        }

        let results: SearchResults = resp.json().await?;
        debug!(query, count = results.items.len(), "Repository search complete");
        Ok(results)
    }

    /// Lazily walk every page of a user's repositories. The stream fetches
    /// a page per poll and ends after the first page whose continuation
    /// signal reports no successor; an error ends it immediately.
    ///
    /// Takes `self` by value so the stream owns its client and can outlive
    /// the caller's borrow; consumers drop or abort it to cancel the walk.
    pub fn repo_pages(
        self,
        username: String,
        per_page: u32,
    ) -> impl Stream<Item = Result<Vec<Repository>, GithubError>> {
        futures::stream::try_unfold(Some(1u32), move |page| {
            let client = self.clone();
            let username = username.clone();
            async move {
                let Some(page) = page else {
                    return Ok(None);
                };
                let fetched = client.get_repositories(&username, page, per_page).await?;
                let next = if fetched.has_more() { Some(page + 1) } else { None };
                Ok(Some((fetched.items, next)))
            }
        })
    }
}
