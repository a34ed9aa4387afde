//! stats.rs
//!
//! Pure aggregation for the four page statistics. Nothing here touches
//! the network or the clock; callers pass `today` in so tests control it.

use chrono::{DateTime, Datelike, Utc};

use crate::github::{Profile, Repo};

/// Bytes of source per displayed "line of code". The line count is a
/// heuristic over the language byte totals, not a parse.
pub const BYTES_PER_LINE: u64 = 50;

/// Values shown when the GitHub fetch fails entirely.
pub const FALLBACK: DerivedStats = DerivedStats {
    completed_projects: 20,
    lines_of_code: 100_000,
    total_repos: 20,
    years_active: 5,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedStats {
    pub completed_projects: u32,
    pub lines_of_code: u64,
    pub total_repos: u32,
    pub years_active: i32,
}

/// Derive the four statistics from one fetch's worth of data.
pub fn derive(
    profile: &Profile,
    repos: &[Repo],
    total_bytes: u64,
    today: DateTime<Utc>,
) -> DerivedStats {
    DerivedStats {
        completed_projects: completed_projects(repos),
        lines_of_code: round_for_display(approximate_lines(total_bytes)),
        total_repos: profile.public_repos,
        years_active: years_active(profile.created_at, today),
    }
}

pub fn approximate_lines(total_bytes: u64) -> u64 {
    total_bytes / BYTES_PER_LINE
}

/// Coarsen a line count for display: values of 10000 and up floor to the
/// nearest 1000, values from 1000 floor to the nearest 100, and zero
/// becomes 1000 so the counter never sits at nothing.
pub fn round_for_display(lines: u64) -> u64 {
    if lines >= 10_000 {
        lines / 1_000 * 1_000
    } else if lines >= 1_000 {
        lines / 100 * 100
    } else if lines == 0 {
        1_000
    } else {
        lines
    }
}

/// Non-fork repositories across the whole fetched list.
pub fn completed_projects(repos: &[Repo]) -> u32 {
    repos.iter().filter(|repo| !repo.fork).count() as u32
}

/// Calendar years since the account was created, never less than 1.
pub fn years_active(created_at: DateTime<Utc>, today: DateTime<Utc>) -> i32 {
    (today.year() - created_at.year()).max(1)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use proptest::prelude::*;

    use super::*;

    fn repo(name: &str, fork: bool) -> Repo {
        Repo {
            name: name.to_string(),
            description: None,
            html_url: format!("https://github.com/someone/{name}"),
            language: None,
            stargazers_count: 0,
            forks_count: 0,
            fork,
        }
    }

    fn utc_date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
    }

    #[test]
    fn rounding_bands() {
        assert_eq!(round_for_display(52_345), 52_000);
        assert_eq!(round_for_display(10_000), 10_000);
        assert_eq!(round_for_display(5_432), 5_400);
        assert_eq!(round_for_display(1_000), 1_000);
        assert_eq!(round_for_display(999), 999);
        assert_eq!(round_for_display(1), 1);
        assert_eq!(round_for_display(0), 1_000);
    }

    #[test]
    fn byte_heuristic_matches_worked_example() {
        let lines = approximate_lines(2_500_000);
        assert_eq!(lines, 50_000);
        assert_eq!(round_for_display(lines), 50_000);
    }

    #[test]
    fn years_never_below_one() {
        let today = utc_date(2026, 8, 6);
        assert_eq!(years_active(utc_date(2018, 1, 15), today), 8);
        assert_eq!(years_active(utc_date(2026, 2, 1), today), 1);
        assert_eq!(years_active(utc_date(2027, 1, 1), today), 1);
    }

    #[test]
    fn completed_projects_counts_non_forks() {
        assert_eq!(completed_projects(&[]), 0);
        assert_eq!(completed_projects(&[repo("a", false), repo("b", true)]), 1);
        assert_eq!(
            completed_projects(&[repo("a", true), repo("b", true)]),
            0
        );
    }

    #[test]
    fn derive_combines_all_four() {
        let profile = Profile {
            created_at: utc_date(2020, 5, 1),
            public_repos: 34,
        };
        let repos = [repo("a", false), repo("b", true), repo("c", false)];
        let stats = derive(&profile, &repos, 2_500_000, utc_date(2026, 8, 6));
        assert_eq!(
            stats,
            DerivedStats {
                completed_projects: 2,
                lines_of_code: 50_000,
                total_repos: 34,
                years_active: 6,
            }
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            .. ProptestConfig::default()
        })]

        /// PROPERTY: display rounding is idempotent and always positive.
        #[test]
        fn property_rounding_idempotent_and_positive(lines in any::<u64>()) {
            let once = round_for_display(lines);
            prop_assert!(once >= 1);
            prop_assert_eq!(round_for_display(once), once);
        }

        /// PROPERTY: rounding never increases a nonzero count.
        #[test]
        fn property_rounding_floors(lines in 1u64..) {
            prop_assert!(round_for_display(lines) <= lines);
        }
    }
}
