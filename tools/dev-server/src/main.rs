//! Development Server for Folio
//!
//! Serves the built single-page app with a client-side routing fallback and
//! two placeholder API endpoints.

mod config;
mod routes;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;

fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("folio_server=info,tower_http=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_tracing();

    let config = ServerConfig::from_env()?;
    let addr = config.addr();
    let app = routes::app(&config);

    if !config.web_root.join("index.html").is_file() {
        tracing::warn!(root = %config.web_root.display(), "index.html not found; build the site first");
    }

    println!("╔═══════════════════════════════════════════════════╗");
    println!("║              Folio Development Server             ║");
    println!("╠═══════════════════════════════════════════════════╣");
    println!("║  URL: http://{:<37}║", addr);
    println!("║  Press Ctrl+C to stop                             ║");
    println!("╚═══════════════════════════════════════════════════╝");
    println!();

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, root = %config.web_root.display(), "listening");

    axum::serve(listener, app).await.context("server stopped")?;
    Ok(())
}
