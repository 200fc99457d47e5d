//! Local web dashboard: an axum server exposing the chart page and the
//! JSON endpoints behind it.

pub mod config;
pub mod error;
pub mod handlers;
pub mod page;
pub mod routes;
pub mod server;
pub mod state;

pub use config::DashboardConfig;
pub use error::{DashboardError, DashboardResult};
pub use server::DashboardServer;
pub use state::AppState;
