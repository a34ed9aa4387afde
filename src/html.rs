//! HTML fragments for the page's GitHub section.
//!
//! The generated markup carries everything the page's stylesheet and
//! scripts animate: counters start at 0 and keep their real value in
//! `data-target`, cards carry a stepped `animation-delay` for the
//! fade-in. The fragments are written to disk and included in the static
//! page as-is.

use crate::fetcher::{RepoGrid, StatCounters};
use crate::github::Repo;
use crate::stats::DerivedStats;

/// Display color for languages missing from the table.
const DEFAULT_LANGUAGE_COLOR: &str = "#8257e5";

/// Card colors for the language dot, keyed by GitHub's language names.
pub fn language_color(language: &str) -> &'static str {
    match language {
        "JavaScript" => "#f1e05a",
        "Python" => "#3572A5",
        "C" => "#555555",
        "C++" => "#f34b7d",
        "Java" => "#b07219",
        "HTML" => "#e34c26",
        "CSS" => "#563d7c",
        "TypeScript" => "#2b7489",
        "Go" => "#00ADD8",
        "Rust" => "#dea584",
        _ => DEFAULT_LANGUAGE_COLOR,
    }
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Builds the `repos-grid` fragment: one linked card per repository, or
/// a single message in the empty and unavailable states.
pub struct HtmlRepoGrid {
    profile_url: String,
    html: String,
}

impl HtmlRepoGrid {
    pub fn new(login: &str) -> Self {
        Self {
            profile_url: format!("https://github.com/{login}"),
            html: String::new(),
        }
    }

    pub fn into_html(self) -> String {
        self.html
    }
}

impl RepoGrid for HtmlRepoGrid {
    fn show_cards(&mut self, repos: &[Repo]) {
        let mut out = String::new();
        for (index, repo) in repos.iter().enumerate() {
            let name = escape_html(&repo.name);
            let description =
                escape_html(repo.description.as_deref().unwrap_or("No description available"));
            let language_stat = match repo.language.as_deref() {
                Some(language) => format!(
                    r#"<span class="repo-stat"><span class="language-dot" style="background-color: {color}"></span>{language}</span>"#,
                    color = language_color(language),
                    language = escape_html(language),
                ),
                None => String::new(),
            };

            // The display cap keeps `index` a single digit, so the delay
            // steps 0.0s, 0.1s, ... without float formatting.
            out.push_str(&format!(
                r#"<a href="{url}" target="_blank" class="repo-card" style="animation-delay: 0.{index}s">
    <div class="repo-header">
        <span class="repo-icon">&#128230;</span>
        <h3 class="repo-name">{name}</h3>
    </div>
    <p class="repo-description">{description}</p>
    <div class="repo-stats">
        {language_stat}
        <span class="repo-stat">&#11088; {stars}</span>
        <span class="repo-stat">&#128305; {forks}</span>
    </div>
</a>
"#,
                url = escape_html(&repo.html_url),
                index = index,
                name = name,
                description = description,
                language_stat = language_stat,
                stars = repo.stargazers_count,
                forks = repo.forks_count,
            ));
        }
        self.html = out;
    }

    fn show_empty(&mut self) {
        self.html =
            r#"<p style="grid-column: 1/-1; text-align: center;">No repositories found.</p>"#
                .to_string();
    }

    fn show_unavailable(&mut self) {
        self.html = format!(
            r#"<p>Unable to load repositories. Please visit <a href="{}" target="_blank">GitHub</a> directly.</p>"#,
            self.profile_url
        );
    }
}

/// Builds the stat-counter fragment consumed by the page's count-up
/// script: four counters, in the page's display order.
#[derive(Default)]
pub struct HtmlStatCounters {
    html: String,
}

impl HtmlStatCounters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_html(self) -> String {
        self.html
    }
}

impl StatCounters for HtmlStatCounters {
    fn set_targets(&mut self, stats: &DerivedStats) {
        let rows: [(&str, u64); 4] = [
            ("Projects Completed", u64::from(stats.completed_projects)),
            ("Lines of Code", stats.lines_of_code),
            ("Repositories", u64::from(stats.total_repos)),
            ("Years Experience", stats.years_active as u64),
        ];

        let mut out = String::new();
        for (label, value) in rows {
            out.push_str(&format!(
                "<div class=\"stat-item\"><span class=\"stat-number\" data-target=\"{value}\">0</span><p class=\"stat-label\">{label}</p></div>\n",
            ));
        }
        self.html = out;
    }
}
