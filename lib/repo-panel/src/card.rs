use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

use crate::summary::RepositorySummary;

pub const NO_DESCRIPTION: &str = "No description available";

/// Everything one repository card displays, already formatted.
#[derive(Debug, Clone, PartialEq)]
pub struct RepoCard {
    pub href: String,
    pub name: String,
    pub description: String,
    pub language: Option<LanguageTag>,
    pub stars: Option<u64>,
    pub forks: Option<u64>,
    pub updated: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LanguageTag {
    pub label: String,
    /// Stylesheet class picking the language dot colour.
    pub class: String,
}

impl RepoCard {
    /// `offset` is the viewer's UTC offset at `summary.updated_at`.
    pub fn new(summary: &RepositorySummary, offset: UtcOffset) -> Self {
        let description = summary
            .description
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(NO_DESCRIPTION)
            .to_string();
        let language = summary
            .language
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(|label| LanguageTag {
                label: label.to_string(),
                class: label.to_lowercase(),
            });

        Self {
            href: summary.url.clone(),
            name: summary.name.clone(),
            description,
            language,
            stars: Some(summary.star_count).filter(|&n| n > 0),
            forks: Some(summary.fork_count).filter(|&n| n > 0),
            updated: format_month_year(summary.updated_at.to_offset(offset)),
        }
    }
}

/// `Jun 2024` style label.
pub fn format_month_year(at: OffsetDateTime) -> String {
    at.format(format_description!("[month repr:short] [year]"))
        .unwrap_or_default()
}
