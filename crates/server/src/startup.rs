use std::sync::Arc;

use axum::http::{header, HeaderValue, Method};
use axum::Router;
use configs::{AppConfig, CorsConfig};
use tower_http::cors::CorsLayer;
use tracing::{error, info, warn};

use crate::{routes, state::AppState};

/// Single-origin CORS policy with credentials, as the browser frontend expects.
pub fn build_cors(cfg: &CorsConfig) -> anyhow::Result<CorsLayer> {
    let origin = HeaderValue::from_str(cfg.allowed_origin.trim())
        .map_err(|e| anyhow::anyhow!("invalid cors origin '{}': {e}", cfg.allowed_origin))?;
    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]))
}

/// Router with state and CORS wired from configuration.
pub fn app(state: AppState, cors: &CorsConfig) -> anyhow::Result<Router> {
    Ok(routes::build_router(state, build_cors(cors)?))
}

/// Public entry: open storage, serve until a shutdown signal, then close the pool.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let store = catalog::open(&cfg.database).await?;
    let db = store.db.clone();

    match models::db::server_time(&db).await {
        Ok(now) => info!(server_time = %now, "database connected"),
        Err(e) => warn!(error = %e, "database clock probe failed"),
    }

    let state = AppState::new(Arc::new(store));
    let app = app(state, &cfg.cors)?;

    let addr = cfg.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, origin = %cfg.cors.allowed_origin, "catalog server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("draining database pool");
    if let Err(e) = db.close().await {
        error!(error = %e, "failed to close database pool");
    }
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "failed to install Ctrl+C handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("shutdown signal received");
}
