//! Serde types for the GitHub repository search API.

use serde::Deserialize;

/// One repository record from a search result page.
///
/// GitHub returns many more fields per item; only the ones the dashboard
/// consumes are decoded, everything else is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
    /// Primary language, as detected by GitHub. Absent for repositories
    /// with no recognized source code.
    pub language: Option<String>,
    pub stargazers_count: u64,
    pub forks_count: u64,
}

/// Envelope of a `search/repositories` response.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    /// Total number of matches across all pages. Only the first page of
    /// items is ever fetched.
    pub total_count: u64,
    pub incomplete_results: bool,
    pub items: Vec<Repository>,
}

impl Repository {
    /// Convenience constructor, mainly for tests and fixtures.
    #[allow(unused)]
    pub fn new(language: Option<&str>, stargazers_count: u64, forks_count: u64) -> Self {
        Self {
            language: language.map(str::to_string),
            stargazers_count,
            forks_count,
        }
    }
}
