use std::collections::HashMap;
use std::iter;

use chrono::{DateTime, Utc};
use reqwest::Client;
use reqwest::header::{HeaderValue, USER_AGENT};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::FetchError;
use crate::fetcher::RepoSource;

const API_ROOT: &str = "https://api.github.com";

/// Account fields from `GET /users/{login}`.
#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    pub created_at: DateTime<Utc>,
    pub public_repos: u32,
}

/// One entry of `GET /users/{login}/repos`. Field names follow the REST
/// payload so the derives need no renames; unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Repo {
    pub name: String,
    pub description: Option<String>,
    pub html_url: String,
    pub language: Option<String>,
    pub stargazers_count: u32,
    pub forks_count: u32,
    pub fork: bool,
}

/// Language name to byte count, from `GET /repos/{login}/{repo}/languages`.
pub type LanguageBytes = HashMap<String, u64>;

#[derive(Clone)]
pub struct GithubClient {
    http: Client,
}

impl GithubClient {
    const USER_AGENT: &'static str = "portfolio-stats";

    /// Build a client carrying the `User-Agent` GitHub requires on every
    /// request. All calls are unauthenticated.
    pub fn new() -> Result<Self, FetchError> {
        let http = Client::builder()
            .default_headers(
                iter::once((USER_AGENT, HeaderValue::from_static(Self::USER_AGENT))).collect(),
            )
            .build()?;
        Ok(Self { http })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, FetchError> {
        let resp = self.http.get(&url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }
        Ok(resp.json().await?)
    }
}

impl RepoSource for GithubClient {
    async fn profile(&self, login: &str) -> Result<Profile, FetchError> {
        self.get_json(format!("{API_ROOT}/users/{login}")).await
    }

    async fn recent_repos(&self, login: &str, per_page: u32) -> Result<Vec<Repo>, FetchError> {
        self.get_json(format!(
            "{API_ROOT}/users/{login}/repos?sort=updated&per_page={per_page}"
        ))
        .await
    }

    async fn languages(&self, login: &str, repo: &str) -> Result<LanguageBytes, FetchError> {
        self.get_json(format!("{API_ROOT}/repos/{login}/{repo}/languages"))
            .await
    }
}
