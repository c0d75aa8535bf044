use serde::Deserialize;
use time::OffsetDateTime;

use crate::ApiError;

// not implements all
#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
    pub id: i64,
    pub name: String,
    pub full_name: String,
    pub html_url: String,
    pub description: Option<String>,
    pub language: Option<String>,
    pub stargazers_count: u64,
    pub forks_count: u64,
    pub fork: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// Server-side ordering accepted by the repository listing endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RepoSort {
    Created,
    #[default]
    Updated,
    Pushed,
    FullName,
}

impl RepoSort {
    fn as_query_param(&self) -> &'static str {
        match self {
            RepoSort::Created => "created",
            RepoSort::Updated => "updated",
            RepoSort::Pushed => "pushed",
            RepoSort::FullName => "full_name",
        }
    }
}

/// Fetch one page of public repositories owned by `username`.
pub async fn list_user_repos(
    username: &str,
    sort: RepoSort,
    per_page: u32,
) -> Result<Vec<Repository>, ApiError> {
    list_user_repos_at(crate::GITHUB_API_HOST, username, sort, per_page).await
}

pub async fn list_user_repos_at(
    host: &str,
    username: &str,
    sort: RepoSort,
    per_page: u32,
) -> Result<Vec<Repository>, ApiError> {
    log::info!(
        "[Github API] list_user_repos, username={username}, sort={}, per_page={per_page}",
        sort.as_query_param()
    );
    if !is_valid_username(username) {
        return Err(ApiError::InvalidUsername(username.to_string()));
    }
    let url = format!("{host}/users/{username}/repos");
    let client = reqwest::Client::new();
    let request = client
        .get(url)
        .query(&[
            ("sort", sort.as_query_param().to_string()),
            ("per_page", per_page.to_string()),
        ])
        .header(reqwest::header::ACCEPT, "application/vnd.github+json");
    #[cfg(not(target_arch = "wasm32"))]
    let request = request.header(reqwest::header::USER_AGENT, crate::UA);

    let resp = request.send().await?;
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(ApiError::Status { status, body });
    }

    let raw_data = resp.text().await?;
    if cfg!(debug_assertions) {
        log::debug!("[Github API] list_user_repos, resp={raw_data}");
    }
    Ok(serde_json::from_str(&raw_data)?)
}

/// GitHub logins are ASCII alphanumerics and inner hyphens, at most 39 long.
/// Anything else would change the request path or query.
pub fn is_valid_username(username: &str) -> bool {
    !username.is_empty()
        && username.len() <= 39
        && !username.starts_with('-')
        && !username.ends_with('-')
        && username.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
}

#[cfg(test)]
mod test {
    use super::*;
    use mockito::Matcher;
    use reqwest::StatusCode;
    use serde_json::json;

    fn listing_query() -> Matcher {
        Matcher::AllOf(vec![
            Matcher::UrlEncoded("sort".into(), "updated".into()),
            Matcher::UrlEncoded("per_page".into(), "30".into()),
        ])
    }

    #[test]
    pub fn test_list_user_repos_success() {
        let mut server = mockito::Server::new();

        tokio_test::block_on(async {
            let response_body = json!([
                {
                    "id": 1296269,
                    "name": "Hello-World",
                    "full_name": "octocat/Hello-World",
                    "html_url": "https://github.com/octocat/Hello-World",
                    "description": "This your first repo!",
                    "language": "Rust",
                    "stargazers_count": 80,
                    "forks_count": 9,
                    "fork": false,
                    "updated_at": "2024-06-01T12:30:00Z",
                    "watchers_count": 80
                },
                {
                    "id": 42,
                    "name": "dotfiles",
                    "full_name": "octocat/dotfiles",
                    "html_url": "https://github.com/octocat/dotfiles",
                    "description": null,
                    "language": null,
                    "stargazers_count": 0,
                    "forks_count": 0,
                    "fork": true,
                    "updated_at": "2023-01-15T08:00:00Z"
                }
            ])
            .to_string();

            let mock = server
                .mock("GET", "/users/octocat/repos")
                .match_query(listing_query())
                .match_header("Accept", "application/vnd.github+json")
                .with_header("Content-Type", "application/json")
                .with_body(response_body)
                .create();

            let repos = list_user_repos_at(&server.url(), "octocat", RepoSort::Updated, 30)
                .await
                .expect("this http request should return success");

            assert_eq!(repos.len(), 2);
            assert_eq!(repos[0].full_name, "octocat/Hello-World");
            assert_eq!(repos[0].language.as_deref(), Some("Rust"));
            assert_eq!(repos[0].stargazers_count, 80);
            assert_eq!(repos[0].forks_count, 9);
            assert_eq!(repos[0].updated_at.year(), 2024);
            assert!(!repos[0].fork);
            assert!(repos[1].description.is_none());
            assert!(repos[1].fork);
            mock.assert();
        })
    }

    #[test]
    pub fn test_list_user_repos_bad_status() {
        let mut server = mockito::Server::new();

        tokio_test::block_on(async {
            let mock = server
                .mock("GET", "/users/octocat/repos")
                .match_query(listing_query())
                .with_status(403)
                .with_body(r#"{"message":"API rate limit exceeded"}"#)
                .create();

            let err = list_user_repos_at(&server.url(), "octocat", RepoSort::Updated, 30)
                .await
                .expect_err("403 should fail");

            match err {
                ApiError::Status { status, body } => {
                    assert_eq!(status, StatusCode::FORBIDDEN);
                    assert!(body.contains("rate limit"));
                }
                other => panic!("expected status error, got {other:?}"),
            }
            mock.assert();
        })
    }

    #[test]
    pub fn test_list_user_repos_malformed_body() {
        let mut server = mockito::Server::new();

        tokio_test::block_on(async {
            let mock = server
                .mock("GET", "/users/octocat/repos")
                .match_query(listing_query())
                .with_header("Content-Type", "application/json")
                .with_body(r#"{"not": "a list"}"#)
                .create();

            let err = list_user_repos_at(&server.url(), "octocat", RepoSort::Updated, 30)
                .await
                .expect_err("object body should fail to parse");

            assert!(matches!(err, ApiError::Parse(_)));
            mock.assert();
        })
    }

    #[test]
    pub fn test_list_user_repos_unreachable() {
        tokio_test::block_on(async {
            let err = list_user_repos_at("http://127.0.0.1:1", "octocat", RepoSort::Updated, 30)
                .await
                .expect_err("nothing listens on port 1");

            assert!(matches!(err, ApiError::Network(_)));
        })
    }

    #[test]
    pub fn test_list_user_repos_rejects_path_breaking_username() {
        let mut server = mockito::Server::new();

        tokio_test::block_on(async {
            let mock = server
                .mock("GET", Matcher::Any)
                .expect(0)
                .with_body("[]")
                .create();

            for username in ["evil?x=", "octocat/../orgs", "a b", "", "-octocat"] {
                let err = list_user_repos_at(&server.url(), username, RepoSort::Updated, 30)
                    .await
                    .expect_err("username should be rejected before sending");

                assert!(matches!(err, ApiError::InvalidUsername(ref u) if u == username));
            }
            mock.assert();
        })
    }

    #[test]
    pub fn test_valid_username() {
        assert!(is_valid_username("octocat"));
        assert!(is_valid_username("gouravhanumante"));
        assert!(is_valid_username("rust-lang"));
        assert!(!is_valid_username("octocat?tab=repos"));
        assert!(!is_valid_username("octo#cat"));
        assert!(!is_valid_username("trailing-"));
        assert!(!is_valid_username(&"a".repeat(40)));
    }

    #[test]
    pub fn test_sort_query_param() {
        assert_eq!(RepoSort::default().as_query_param(), "updated");
        assert_eq!(RepoSort::FullName.as_query_param(), "full_name");
    }
}
