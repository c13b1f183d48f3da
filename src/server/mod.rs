//! Static preview server
//!
//! Serves the base directory so a host page can load the widget locally.
//! The compiled document gets an explicit handler so its responses carry
//! `Cache-Control: no-store` - the producer side of the viewer's
//! cache-bypass contract.

use anyhow::Result;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::services::ServeDir;

use crate::Newsbox;

/// Server state
struct ServerState {
    output_path: PathBuf,
}

/// Start the preview server
pub async fn start(app: &Newsbox, ip: &str, port: u16) -> Result<()> {
    let state = Arc::new(ServerState {
        output_path: app.output_path.clone(),
    });

    let serve_dir = ServeDir::new(&app.base_dir).append_index_html_on_directories(true);

    let router = Router::new()
        .route(&app.config.json_path, get(news_document_handler))
        .fallback_service(serve_dir)
        .with_state(state);

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Server running at http://{}:{}", ip, port);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

/// Serve the compiled document with cache-bypass headers
async fn news_document_handler(State(state): State<Arc<ServerState>>) -> Response {
    match tokio::fs::read(&state.output_path).await {
        Ok(bytes) => (
            [
                (header::CONTENT_TYPE, "application/json"),
                (header::CACHE_CONTROL, "no-store"),
            ],
            bytes,
        )
            .into_response(),
        Err(_) => (StatusCode::NOT_FOUND, "Not found").into_response(),
    }
}
