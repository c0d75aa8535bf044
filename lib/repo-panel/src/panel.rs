use github_api::repos::{list_user_repos_at, RepoSort, Repository};
use github_api::{ApiError, GITHUB_API_HOST, GITHUB_WEB_HOST};
use time::{OffsetDateTime, UtcOffset};

use crate::card::RepoCard;
use crate::rank::{rank_repositories, DISPLAY_LIMIT};
use crate::summary::RepositorySummary;

pub const DEFAULT_ACCOUNT: &str = "gouravhanumante";
pub const LISTING_PAGE_SIZE: u32 = 30;

pub const EMPTY_MESSAGE: &str = "No public repositories found.";
pub const UNAVAILABLE_MESSAGE: &str = "Unable to load repositories.";
pub const PROFILE_LINK_TEXT: &str = "View on GitHub";

#[derive(Debug, Clone, PartialEq)]
pub struct PanelConfig {
    pub account: String,
    pub api_host: String,
    pub profile_host: String,
    pub sort: RepoSort,
    pub per_page: u32,
    pub display_limit: usize,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            account: DEFAULT_ACCOUNT.to_string(),
            api_host: GITHUB_API_HOST.to_string(),
            profile_host: GITHUB_WEB_HOST.to_string(),
            sort: RepoSort::Updated,
            per_page: LISTING_PAGE_SIZE,
            display_limit: DISPLAY_LIMIT,
        }
    }
}

impl PanelConfig {
    pub fn with_account(account: impl Into<String>) -> Self {
        Self {
            account: account.into(),
            ..Default::default()
        }
    }

    pub fn profile_url(&self) -> String {
        format!("{}/{}", self.profile_host, self.account)
    }
}

/// Final content of the repository panel.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelView {
    Cards(Vec<RepoCard>),
    Empty,
    Unavailable { profile_url: String },
}

impl PanelView {
    pub fn from_listing(
        config: &PanelConfig,
        listing: Result<Vec<Repository>, ApiError>,
        local_offset: impl Fn(OffsetDateTime) -> UtcOffset,
    ) -> Self {
        let repos = match listing {
            Ok(repos) => repos,
            Err(e) => {
                log::error!("fetch repositories of {} fail: {e}", config.account);
                return PanelView::Unavailable {
                    profile_url: config.profile_url(),
                };
            }
        };

        let summaries = repos.into_iter().map(RepositorySummary::from).collect();
        let ranked = rank_repositories(summaries, config.display_limit);
        if ranked.is_empty() {
            return PanelView::Empty;
        }

        PanelView::Cards(
            ranked
                .iter()
                .map(|repo| RepoCard::new(repo, local_offset(repo.updated_at)))
                .collect(),
        )
    }
}

/// Fetch and rank the account's repositories. Every failure ends in
/// [`PanelView::Unavailable`]; there is no retry.
pub async fn load_panel(
    config: &PanelConfig,
    local_offset: impl Fn(OffsetDateTime) -> UtcOffset,
) -> PanelView {
    let listing = list_user_repos_at(
        &config.api_host,
        &config.account,
        config.sort,
        config.per_page,
    )
    .await;
    PanelView::from_listing(config, listing, local_offset)
}
