mod config;
mod es;
mod handlers;
mod models;
mod templates;
mod utils;

use anyhow::Result;
use axum::Router;
use clap::Parser;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use es::EsClient;
use handlers::AppState;

#[derive(Parser, Debug)]
#[command(name = "segment-explorer")]
#[command(about = "Segment memory explorer pro Elasticsearch cluster", long_about = None)]
struct Args {
    /// Host Elasticsearch clusteru
    #[arg(long, default_value = config::DEFAULT_CLUSTER_HOST)]
    cluster_host: String,

    /// Port Elasticsearch clusteru
    #[arg(long, default_value_t = config::DEFAULT_CLUSTER_PORT)]
    cluster_port: u16,

    /// Host pro HTTP server
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port pro HTTP server
    #[arg(short, long, default_value_t = config::DEFAULT_LISTEN_PORT)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Inicializuj logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "segment_explorer=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Parse CLI argumenty
    let args = Args::parse();

    tracing::info!("Starting Segment Explorer...");

    let cluster = config::ClusterConfig::new(args.cluster_host, args.cluster_port);
    tracing::info!("Cluster endpoint: {}", cluster.base_url());

    let es = EsClient::new(cluster.base_url())?;

    // Shared state
    let state = Arc::new(AppState { es });

    let app = app(state);

    // Adresa serveru
    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on http://{}", addr);

    // Spusť server
    axum::serve(listener, app).await?;

    Ok(())
}

/// Vytvoří axum router - každá cesta i metoda vede na stejný handler
fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .fallback(handlers::segments::segments_page)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
