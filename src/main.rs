use std::error::Error;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use starboard::aggregate;
use starboard::consts::app_consts::server;
use starboard::dashboard::{AppState, DashboardConfig, DashboardServer};
use starboard::environment::Environment;
use starboard::github::{GithubClient, RepositoryFetcher};

#[derive(Parser)]
#[command(author, version, long_about = None)]
/// Command-line arguments
struct Args {
    /// Interface to bind the dashboard to.
    #[arg(long, default_value = server::DEFAULT_HOST)]
    host: IpAddr,

    /// Port to bind the dashboard to.
    #[arg(long, default_value_t = server::DEFAULT_PORT)]
    port: u16,

    /// API environment to fetch from (production or local).
    #[arg(long, default_value = "production")]
    env: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let environment = args
        .env
        .parse::<Environment>()
        .unwrap_or(Environment::default());

    let client = GithubClient::new(environment);

    // The options list is computed exactly once, here. A failure at this
    // point aborts startup; later per-request fetch failures only abort the
    // affected chart update.
    info!(environment = %environment, "fetching initial repository page");
    let repositories = client.fetch_repositories().await?;
    let language_options = aggregate::language_options(&repositories);
    info!(
        repositories = repositories.len(),
        languages = language_options.len(),
        "computed dropdown options"
    );

    let config = DashboardConfig::new(SocketAddr::new(args.host, args.port));
    let state = Arc::new(AppState::new(
        Box::new(client),
        language_options,
        environment,
    ));

    let dashboard = DashboardServer::new(state);
    dashboard
        .serve_with_shutdown(config.bind_addr, async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await?;

    Ok(())
}
