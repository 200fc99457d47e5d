//! Dashboard server configuration.

use crate::consts::app_consts::server;
use std::net::SocketAddr;

/// Configuration for the dashboard server.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Address to bind the HTTP server to.
    pub bind_addr: SocketAddr,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            // 8050 is the conventional local dashboard port.
            bind_addr: SocketAddr::from(([127, 0, 0, 1], server::DEFAULT_PORT)),
        }
    }
}

impl DashboardConfig {
    /// Create a new configuration with the specified bind address.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self { bind_addr }
    }
}
