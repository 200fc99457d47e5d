//! Shared state for the dashboard server.

use std::time::Instant;

use chrono::{DateTime, Utc};

use crate::environment::Environment;
use crate::github::RepositoryFetcher;

/// Shared state for the dashboard server.
///
/// The language options are computed once from the startup fetch and never
/// refreshed afterwards; chart requests re-fetch their own data. This
/// mirrors the source behavior exactly (see DESIGN.md).
pub struct AppState {
    /// Client used for per-request repository fetches.
    fetcher: Box<dyn RepositoryFetcher>,
    /// Dropdown options, frozen at startup.
    language_options: Vec<String>,
    /// Environment the fetcher talks to.
    environment: Environment,
    /// Server start time, for uptime reporting.
    start_time: Instant,
    /// Wall-clock start time, for the health endpoint.
    started_at: DateTime<Utc>,
}

impl AppState {
    /// Create the shared state from a fetcher and the startup options list.
    pub fn new(
        fetcher: Box<dyn RepositoryFetcher>,
        language_options: Vec<String>,
        environment: Environment,
    ) -> Self {
        Self {
            fetcher,
            language_options,
            environment,
            start_time: Instant::now(),
            started_at: Utc::now(),
        }
    }

    pub fn fetcher(&self) -> &dyn RepositoryFetcher {
        self.fetcher.as_ref()
    }

    pub fn language_options(&self) -> &[String] {
        &self.language_options
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    pub fn uptime_secs(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::MockRepositoryFetcher;

    #[test]
    fn options_are_frozen_at_construction() {
        let fetcher = MockRepositoryFetcher::new();
        let state = AppState::new(
            Box::new(fetcher),
            vec!["Go".to_string(), "Rust".to_string()],
            Environment::Local,
        );

        assert_eq!(state.language_options(), ["Go", "Rust"]);
        assert_eq!(state.environment(), Environment::Local);
    }
}
