//! HTTP request handlers for the dashboard API.

use std::collections::HashSet;
use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use axum::response::Html;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::aggregate::{self, LanguageTotals};
use crate::dashboard::error::{DashboardError, DashboardResult};
use crate::dashboard::page::INDEX_HTML;
use crate::dashboard::state::AppState;

/// Query parameters for the chart endpoint.
#[derive(Debug, Deserialize)]
pub struct ChartQuery {
    /// Comma-separated list of selected languages. An empty value is an
    /// empty selection, which renders an empty chart.
    pub languages: Option<String>,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status message.
    pub status: String,
    /// Server uptime in seconds.
    pub uptime_secs: u64,
    /// Wall-clock time the server came up.
    pub started_at: DateTime<Utc>,
    /// API environment the fetcher talks to.
    pub environment: String,
}

/// Handle GET / - the dashboard page itself.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Handle GET /api/health - health check endpoint.
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        uptime_secs: state.uptime_secs(),
        started_at: state.started_at(),
        environment: state.environment().to_string(),
    })
}

/// Handle GET /api/languages - the dropdown options.
///
/// Serves the list computed from the startup fetch. Deliberately never
/// refreshed: chart updates re-fetch repository data but leave the options
/// untouched.
pub async fn list_languages(State(state): State<Arc<AppState>>) -> Json<Vec<String>> {
    Json(state.language_options().to_vec())
}

/// Handle GET /api/chart?languages=a,b,c - aggregated chart rows.
///
/// Every call performs a fresh fetch against the search API; nothing is
/// cached between selection changes.
pub async fn chart_data(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ChartQuery>,
) -> DashboardResult<Json<Vec<LanguageTotals>>> {
    let languages = query.languages.ok_or_else(|| {
        DashboardError::InvalidRequest("missing languages parameter".to_string())
    })?;
    let selected = parse_selection(&languages);

    let records = state.fetcher().fetch_repositories().await.inspect_err(
        |e| warn!(error = %e, "repository fetch failed, chart update aborted"),
    )?;

    let rows = aggregate::aggregate(&records, &selected);
    debug!(
        records = records.len(),
        selected = selected.len(),
        rows = rows.len(),
        "chart update"
    );
    Ok(Json(rows))
}

/// Split the comma-separated `languages` parameter into a selection set.
/// Empty segments are dropped, so `""` means "nothing selected".
fn parse_selection(languages: &str) -> HashSet<String> {
    languages
        .split(',')
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
