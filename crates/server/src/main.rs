//! gallery-mcp server entry point.
//!
//! This is the main binary that boots the MCP server on stdio transport.
//! Logging goes to stderr to avoid interfering with the JSON-RPC protocol on stdout.

use std::sync::Arc;

use anyhow::{Context, Result};
use gallery_core::store::seed::{import, load_seed_file};
use gallery_core::{AppConfig, GalleryService, SqliteStore};
use rmcp::service::serve_server;
use rmcp::transport::io::stdio;
use tracing_subscriber::EnvFilter;

mod error;
mod handler;
mod tools;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .json()
        .init();

    let config = AppConfig::load().context("loading configuration")?;
    tracing::info!(db_path = %config.db_path.display(), ttl_secs = config.cache_ttl_secs, "Starting gallery-mcp server on stdio transport");

    let store = SqliteStore::open(&config.db_path)
        .await
        .with_context(|| format!("opening store at {}", config.db_path.display()))?;

    if let Some(seed_path) = config.seed_path.as_ref().filter(|p| p.exists()) {
        let docs = load_seed_file(seed_path).await?;
        import(&store, docs).await?;
    }

    let service = GalleryService::from_config(Arc::new(store), &config);
    let handler = handler::GalleryServer::new(service);
    let transport = stdio();
    let server = serve_server(handler, transport).await?;

    server.waiting().await?;

    Ok(())
}
