use crate::summary::RepositorySummary;

/// Maximum number of cards the panel shows.
pub const DISPLAY_LIMIT: usize = 6;

/// Drop forks, order by stars then recency (both descending), keep at most `limit`.
///
/// Ranking only sees what the listing returned. The listing is a single page
/// ordered by update time, so an older popular repository beyond that page is
/// never considered.
pub fn rank_repositories(
    repos: Vec<RepositorySummary>,
    limit: usize,
) -> Vec<RepositorySummary> {
    let mut ranked: Vec<_> = repos.into_iter().filter(|repo| !repo.is_fork).collect();
    ranked.sort_by(|a, b| {
        b.star_count
            .cmp(&a.star_count)
            .then_with(|| b.updated_at.cmp(&a.updated_at))
    });
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
pub(crate) mod test {
    use super::*;
    use time::macros::datetime;
    use time::OffsetDateTime;

    pub(crate) fn summary(
        name: &str,
        stars: u64,
        updated_at: OffsetDateTime,
        is_fork: bool,
    ) -> RepositorySummary {
        RepositorySummary {
            name: name.to_string(),
            url: format!("https://github.com/octocat/{name}"),
            description: None,
            language: None,
            star_count: stars,
            fork_count: 0,
            updated_at,
            is_fork,
        }
    }

    fn names(repos: &[RepositorySummary]) -> Vec<&str> {
        repos.iter().map(|repo| repo.name.as_str()).collect()
    }

    #[test]
    pub fn test_forks_are_dropped() {
        let repos = vec![
            summary("own", 1, datetime!(2024-01-01 0:00 UTC), false),
            summary("forked", 500, datetime!(2024-05-01 0:00 UTC), true),
        ];

        let ranked = rank_repositories(repos, DISPLAY_LIMIT);

        assert_eq!(names(&ranked), vec!["own"]);
    }

    #[test]
    pub fn test_equal_stars_prefer_recent() {
        let repos = vec![
            summary("january", 10, datetime!(2024-01-01 0:00 UTC), false),
            summary("june", 10, datetime!(2024-06-01 0:00 UTC), false),
        ];

        let ranked = rank_repositories(repos, DISPLAY_LIMIT);

        assert_eq!(names(&ranked), vec!["june", "january"]);
    }

    #[test]
    pub fn test_order_and_limit() {
        let repos = vec![
            summary("a", 3, datetime!(2024-03-01 0:00 UTC), false),
            summary("b", 12, datetime!(2023-03-01 0:00 UTC), false),
            summary("c", 0, datetime!(2024-09-01 0:00 UTC), false),
            summary("d", 7, datetime!(2024-02-01 0:00 UTC), true),
            summary("e", 3, datetime!(2024-04-01 0:00 UTC), false),
            summary("f", 40, datetime!(2022-01-01 0:00 UTC), false),
            summary("g", 1, datetime!(2024-01-01 0:00 UTC), false),
            summary("h", 0, datetime!(2024-10-01 0:00 UTC), false),
            summary("i", 5, datetime!(2021-01-01 0:00 UTC), false),
        ];

        let ranked = rank_repositories(repos, DISPLAY_LIMIT);

        assert_eq!(names(&ranked), vec!["f", "b", "i", "e", "a", "g"]);
        for pair in ranked.windows(2) {
            assert!(pair[0].star_count >= pair[1].star_count);
            if pair[0].star_count == pair[1].star_count {
                assert!(pair[0].updated_at >= pair[1].updated_at);
            }
        }
    }

    #[test]
    pub fn test_only_forks_yields_nothing() {
        let repos = vec![
            summary("x", 2, datetime!(2024-01-01 0:00 UTC), true),
            summary("y", 9, datetime!(2024-01-02 0:00 UTC), true),
        ];

        assert!(rank_repositories(repos, DISPLAY_LIMIT).is_empty());
    }
}
