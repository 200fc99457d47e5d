//! Error handling for the GitHub fetcher module

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetcherError {
    /// Reqwest error, typically related to network issues or request failures.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-success status code.
    #[error("HTTP error with status {status}: {message}")]
    Http { status: u16, message: String },

    /// The response body was not valid JSON, or lacked the expected shape.
    #[error("Malformed response body: {0}")]
    Parse(#[from] serde_json::Error),
}

impl FetcherError {
    pub async fn from_response(response: reqwest::Response) -> FetcherError {
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response text".to_string());

        FetcherError::Http { status, message }
    }
}
