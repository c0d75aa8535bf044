use github_api::repos::Repository;
use time::OffsetDateTime;

/// One repository as shown on the page. Rebuilt on every load.
#[derive(Debug, Clone, PartialEq)]
pub struct RepositorySummary {
    pub name: String,
    pub url: String,
    pub description: Option<String>,
    pub language: Option<String>,
    pub star_count: u64,
    pub fork_count: u64,
    pub updated_at: OffsetDateTime,
    pub is_fork: bool,
}

impl From<Repository> for RepositorySummary {
    fn from(repo: Repository) -> Self {
        Self {
            name: repo.name,
            url: repo.html_url,
            description: repo.description,
            language: repo.language,
            star_count: repo.stargazers_count,
            fork_count: repo.forks_count,
            updated_at: repo.updated_at,
            is_fork: repo.fork,
        }
    }
}
