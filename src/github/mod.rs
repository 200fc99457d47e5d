use crate::environment::Environment;
use crate::github::error::FetcherError;
use crate::github::types::Repository;

pub(crate) mod client;
pub use client::GithubClient;
pub mod error;
pub mod types;

#[cfg(test)]
use mockall::{automock, predicate::*};

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait RepositoryFetcher: Send + Sync {
    fn environment(&self) -> &Environment;

    /// Fetch the first page of public repository metadata from the search
    /// endpoint. One outbound network call per invocation; no retry, no
    /// pagination.
    async fn fetch_repositories(&self) -> Result<Vec<Repository>, FetcherError>;
}
