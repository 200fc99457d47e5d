pub mod app_consts {
    //! Dashboard Configuration Constants
    //!
    //! This module contains all configuration constants for the dashboard,
    //! organized by functional area for clarity and maintainability.

    // =============================================================================
    // SEARCH CONFIGURATION
    // =============================================================================

    /// Search API query module
    pub mod search {
        /// Path of the repository search endpoint, relative to the API base URL.
        pub const ENDPOINT: &str = "search/repositories";

        /// Qualifier sent to the search endpoint. Matches every public
        /// repository with at least one star; the API returns its first
        /// result page in default relevance order.
        pub const QUERY: &str = "stars:>0";
    }

    // =============================================================================
    // NETWORK CONFIGURATION
    // =============================================================================

    /// Outbound HTTP client configuration
    pub mod http {
        use std::time::Duration;

        /// Maximum time to wait when establishing a connection (seconds)
        pub const CONNECT_TIMEOUT_SECS: u64 = 10;

        /// Maximum time to wait for a complete response (seconds)
        pub const REQUEST_TIMEOUT_SECS: u64 = 10;

        /// Helper function to get the connect timeout
        pub const fn connect_timeout() -> Duration {
            Duration::from_secs(CONNECT_TIMEOUT_SECS)
        }

        /// Helper function to get the request timeout
        pub const fn request_timeout() -> Duration {
            Duration::from_secs(REQUEST_TIMEOUT_SECS)
        }
    }

    // =============================================================================
    // SERVER CONFIGURATION
    // =============================================================================

    /// Local dashboard server defaults
    pub mod server {
        /// Interface the dashboard binds to unless overridden.
        pub const DEFAULT_HOST: &str = "127.0.0.1";

        /// Port the dashboard binds to unless overridden.
        pub const DEFAULT_PORT: u16 = 8050;
    }
}
