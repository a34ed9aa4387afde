//! Fetch-and-publish flow for the GitHub section of the page.
//!
//! One `publish` call per run: fetch the profile and the repository list
//! together, sample the newest repositories for language bytes, derive
//! the page statistics, and hand everything to the two rendering
//! collaborators. Every failure of the outer fetch resolves to the fixed
//! fallback statistics and the grid's unavailable state; nothing is
//! returned as an error to the caller.

use chrono::Utc;
use futures::future::join_all;
use tracing::{error, info, warn};

use crate::error::FetchError;
use crate::github::{LanguageBytes, Profile, Repo};
use crate::stats::{self, DerivedStats, FALLBACK};

/// Repositories fetched per run, most recently updated first.
pub const REPO_PAGE: u32 = 100;
/// Newest repositories sampled for the language-byte aggregation.
pub const LANGUAGE_SAMPLE: usize = 30;
/// Repositories rendered as cards.
pub const DISPLAY_LIMIT: usize = 6;

/// Read-only view of the GitHub API.
pub trait RepoSource {
    async fn profile(&self, login: &str) -> Result<Profile, FetchError>;
    async fn recent_repos(&self, login: &str, per_page: u32) -> Result<Vec<Repo>, FetchError>;
    async fn languages(&self, login: &str, repo: &str) -> Result<LanguageBytes, FetchError>;
}

/// Card-grid side of the page. Exactly one method fires per attempt.
pub trait RepoGrid {
    fn show_cards(&mut self, repos: &[Repo]);
    fn show_empty(&mut self);
    fn show_unavailable(&mut self);
}

/// Stat-counter side of the page.
pub trait StatCounters {
    fn set_targets(&mut self, stats: &DerivedStats);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Success,
    Fallback,
}

/// Fetch everything once and deliver it to both collaborators.
pub async fn publish<S, G, C>(
    source: &S,
    login: &str,
    grid: &mut G,
    counters: &mut C,
) -> FetchOutcome
where
    S: RepoSource,
    G: RepoGrid,
    C: StatCounters,
{
    match gather(source, login).await {
        Ok((derived, repos)) => {
            info!(
                completed = derived.completed_projects,
                lines = derived.lines_of_code,
                repos = derived.total_repos,
                years = derived.years_active,
                "derived github stats"
            );
            counters.set_targets(&derived);
            if repos.is_empty() {
                grid.show_empty();
            } else {
                grid.show_cards(&repos[..repos.len().min(DISPLAY_LIMIT)]);
            }
            FetchOutcome::Success
        }
        Err(e) => {
            error!("github fetch failed, falling back to fixed stats: {e}");
            counters.set_targets(&FALLBACK);
            grid.show_unavailable();
            FetchOutcome::Fallback
        }
    }
}

/// The fallible part: the two page-level requests joined, then the
/// per-repository language fan-out, each request individually guarded.
async fn gather<S: RepoSource>(
    source: &S,
    login: &str,
) -> Result<(DerivedStats, Vec<Repo>), FetchError> {
    let (profile, repos) = tokio::try_join!(
        source.profile(login),
        source.recent_repos(login, REPO_PAGE),
    )?;
    info!("fetched profile and {} repositories", repos.len());

    let byte_maps = join_all(repos.iter().take(LANGUAGE_SAMPLE).map(|repo| async move {
        match source.languages(login, &repo.name).await {
            Ok(bytes) => bytes,
            Err(e) => {
                // A failed language fetch counts as zero bytes for that
                // repository; the rest of the batch is unaffected.
                warn!("language fetch failed for {}: {e}", repo.name);
                LanguageBytes::default()
            }
        }
    }))
    .await;

    let total_bytes: u64 = byte_maps.iter().flat_map(|bytes| bytes.values()).sum();
    let derived = stats::derive(&profile, &repos, total_bytes, Utc::now());
    Ok((derived, repos))
}
