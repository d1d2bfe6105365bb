use std::sync::Arc;

use server::config;
use server::routes;
use server::store::match_index::MatchIndex;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Load .env if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = config::Config::from_env();

    // Index the per-match documents once; requests only do hash lookups
    tracing::info!("Indexing match documents in {}...", config.match_dir().display());
    let index = MatchIndex::build(&config.match_dir()).expect("Failed to index match documents");
    tracing::info!("Match index ready: {} documents", index.len());

    let app = routes::router(config.clone(), Arc::new(index));

    let addr = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind");

    axum::serve(listener, app).await.expect("Server error");
}
