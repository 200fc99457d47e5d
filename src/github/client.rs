//! GitHub Search Client
//!
//! A client for the GitHub repository search API, fetching one page of
//! public repository metadata per call.

use crate::consts::app_consts::{http, search};
use crate::environment::Environment;
use crate::github::RepositoryFetcher;
use crate::github::error::FetcherError;
use crate::github::types::{Repository, SearchResponse};
use reqwest::{Client, ClientBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

// User-Agent string with the dashboard version. GitHub rejects requests
// without a User-Agent header outright.
const USER_AGENT: &str = concat!("starboard/", env!("CARGO_PKG_VERSION"));

// Media type GitHub documents for its REST API responses.
const ACCEPT: &str = "application/vnd.github+json";

#[derive(Debug, Clone)]
pub struct GithubClient {
    client: Client,
    environment: Environment,
}

impl GithubClient {
    pub fn new(environment: Environment) -> Self {
        Self {
            client: ClientBuilder::new()
                .connect_timeout(http::connect_timeout())
                .timeout(http::request_timeout())
                .build()
                .expect("Failed to create HTTP client"),
            environment,
        }
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.environment.api_base_url().trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    /// URL of the repository search endpoint, query qualifier included.
    fn search_url(&self) -> String {
        format!(
            "{}?q={}",
            self.build_url(search::ENDPOINT),
            urlencoding::encode(search::QUERY)
        )
    }

    fn decode_response<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, FetcherError> {
        serde_json::from_slice(bytes).map_err(FetcherError::Parse)
    }

    async fn handle_response_status(response: Response) -> Result<Response, FetcherError> {
        if !response.status().is_success() {
            return Err(FetcherError::from_response(response).await);
        }
        Ok(response)
    }

    async fn get_request<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetcherError> {
        let response = self
            .client
            .get(url)
            .header("User-Agent", USER_AGENT)
            .header("Accept", ACCEPT)
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        let response_bytes = response.bytes().await?;
        Self::decode_response(&response_bytes)
    }
}

#[async_trait::async_trait]
impl RepositoryFetcher for GithubClient {
    fn environment(&self) -> &Environment {
        &self.environment
    }

    async fn fetch_repositories(&self) -> Result<Vec<Repository>, FetcherError> {
        let response: SearchResponse = self.get_request(&self.search_url()).await?;
        debug!(
            total_count = response.total_count,
            page_len = response.items.len(),
            incomplete = response.incomplete_results,
            "fetched first search result page"
        );
        Ok(response.items)
    }
}
