mod error;
mod fetcher;
mod github;
mod html;
mod stats;

use std::fs;

use anyhow::Context;
use github::GithubClient;
use html::{HtmlRepoGrid, HtmlStatCounters};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const LOGIN: &str = "aroesz98";
const OUT_DIR: &str = "dist";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("portfolio_stats=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // GitHub API client
    let client = GithubClient::new()?;

    // One fetch-and-publish pass into the HTML collaborators
    let mut grid = HtmlRepoGrid::new(LOGIN);
    let mut counters = HtmlStatCounters::new();
    let outcome = fetcher::publish(&client, LOGIN, &mut grid, &mut counters).await;

    // Write the fragments for the static page
    fs::create_dir_all(OUT_DIR).with_context(|| format!("creating {OUT_DIR}/"))?;
    let repos_path = format!("{OUT_DIR}/repos.html");
    let stats_path = format!("{OUT_DIR}/stats.html");
    fs::write(&repos_path, grid.into_html()).with_context(|| format!("writing {repos_path}"))?;
    fs::write(&stats_path, counters.into_html())
        .with_context(|| format!("writing {stats_path}"))?;

    info!("wrote {repos_path} and {stats_path} ({outcome:?})");

    Ok(())
}
