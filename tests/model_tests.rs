use repolens::github::models::{RepoPage, Repository, SearchResults, User};

#[test]
fn test_repository_deserializes_rest_payload() {
    let json = r#"{
        "id": 1296269,
        "node_id": "MDEwOlJlcG9zaXRvcnkxMjk2MjY5",
        "name": "Hello-World",
        "full_name": "octocat/Hello-World",
        "private": false,
        "html_url": "https://github.com/octocat/Hello-World",
        "description": "This your first repo!",
        "fork": false,
        "language": "Ruby",
        "stargazers_count": 80,
        "forks_count": 9,
        "license": { "key": "mit", "name": "MIT License" },
        "updated_at": "2011-01-26T19:14:43Z"
    }"#;

    let repo: Repository = serde_json::from_str(json).unwrap();
    assert_eq!(repo.id, 1296269);
    assert_eq!(repo.name, "Hello-World");
    assert_eq!(repo.description.as_deref(), Some("This your first repo!"));
    assert_eq!(repo.language.as_deref(), Some("Ruby"));
    assert_eq!(repo.stargazers_count, 80);
    assert_eq!(repo.forks_count, 9);
    assert_eq!(repo.license.as_ref().unwrap().name, "MIT License");
    assert!(repo.updated_at.is_some());
}

#[test]
fn test_repository_tolerates_nulls() {
    let json = r#"{
        "id": 42,
        "name": "empty",
        "html_url": "https://github.com/u/empty",
        "description": null,
        "language": null,
        "stargazers_count": 0,
        "forks_count": 0,
        "license": null,
        "updated_at": null
    }"#;

    let repo: Repository = serde_json::from_str(json).unwrap();
    assert!(repo.description.is_none());
    assert!(repo.language.is_none());
    assert!(repo.license.is_none());
    assert!(repo.updated_at.is_none());
}

#[test]
fn test_user_deserializes_rest_payload() {
    let json = r#"{
        "login": "octocat",
        "id": 1,
        "avatar_url": "https://github.com/images/error/octocat_happy.gif",
        "html_url": "https://github.com/octocat",
        "name": "monalisa octocat",
        "type": "User",
        "site_admin": false
    }"#;

    let user: User = serde_json::from_str(json).unwrap();
    assert_eq!(user.login, "octocat");
    assert_eq!(user.name.as_deref(), Some("monalisa octocat"));
    assert!(user.avatar_url.ends_with(".gif"));
}

#[test]
fn test_user_name_may_be_null() {
    let json = r#"{
        "login": "ghost",
        "avatar_url": "https://github.com/ghost.png",
        "html_url": "https://github.com/ghost",
        "name": null
    }"#;

    let user: User = serde_json::from_str(json).unwrap();
    assert!(user.name.is_none());
}

#[test]
fn test_search_results_envelope() {
    let json = r#"{
        "total_count": 2,
        "incomplete_results": false,
        "items": [
            { "id": 1, "name": "a", "html_url": "https://github.com/u/a",
              "description": null, "language": "Rust",
              "stargazers_count": 3, "forks_count": 1,
              "license": null, "updated_at": "2024-05-01T00:00:00Z" },
            { "id": 2, "name": "b", "html_url": "https://github.com/u/b",
              "description": "b", "language": null,
              "stargazers_count": 0, "forks_count": 0,
              "license": null, "updated_at": null }
        ]
    }"#;

    let results: SearchResults = serde_json::from_str(json).unwrap();
    assert_eq!(results.total_count, 2);
    assert_eq!(results.items.len(), 2);
    assert_eq!(results.items[0].language.as_deref(), Some("Rust"));
}

fn make_repo(id: u64) -> Repository {
    Repository {
        id,
        name: format!("repo-{}", id),
        description: None,
        html_url: format!("https://github.com/u/repo-{}", id),
        language: None,
        stargazers_count: 0,
        forks_count: 0,
        license: None,
        updated_at: None,
    }
}

#[test]
fn test_repo_page_has_more_with_next_link() {
    let page = RepoPage {
        items: vec![make_repo(1)],
        link: Some(
            "<https://api.github.com/user/repos?page=2>; rel=\"next\", \
             <https://api.github.com/user/repos?page=3>; rel=\"last\""
                .into(),
        ),
    };
    assert!(page.has_more());
}

#[test]
fn test_repo_page_no_more_without_link_header() {
    let page = RepoPage {
        items: vec![make_repo(1)],
        link: None,
    };
    assert!(!page.has_more());
}

#[test]
fn test_repo_page_no_more_on_last_page() {
    let page = RepoPage {
        items: vec![make_repo(1)],
        link: Some(
            "<https://api.github.com/user/repos?page=1>; rel=\"prev\", \
             <https://api.github.com/user/repos?page=1>; rel=\"first\""
                .into(),
        ),
    };
    assert!(!page.has_more());
}
