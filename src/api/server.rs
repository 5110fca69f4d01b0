use anyhow::Context;
use axum::{Router, routing::get};
use sqlx::SqlitePool;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api::{safe, vuln};
use crate::config::Config;
use crate::db::repo;

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub cmd_timeout: Option<Duration>,
}

pub fn router(state: Arc<AppState>, cors: bool) -> Router {
    let app = Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/safe/search", get(safe::search))
        .route("/safe/reflect", get(safe::reflect))
        .route("/safe/echo", get(safe::echo))
        .route("/vuln/search", get(vuln::search))
        .route("/vuln/reflect", get(vuln::reflect))
        .route("/vuln/cmd", get(vuln::cmd));

    let app = if cors {
        app.layer(CorsLayer::permissive())
    } else {
        app
    };

    app.layer(TraceLayer::new_for_http()).with_state(state)
}

pub async fn start_server(config: Config) -> anyhow::Result<()> {
    let pool = repo::connect(&config.database_url, config.max_connections)
        .await
        .with_context(|| format!("Failed to connect to {}", config.database_url))?;

    repo::init(&pool)
        .await
        .context("Failed to create and seed the users table")?;
    let seeded = repo::list_users(&pool).await?.len();
    tracing::info!(users = seeded, db = %config.database_url, "Database ready");

    if config.cmd_timeout().is_none() {
        tracing::warn!("/vuln/cmd has no timeout; commands may run indefinitely");
    }

    let state = Arc::new(AppState {
        db: pool.clone(),
        cmd_timeout: config.cmd_timeout(),
    });

    let app = router(state, !config.no_cors);

    let listener = TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind))?;

    tracing::info!(addr = %config.bind, "Server running");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server failed")?;

    pool.close().await;
    tracing::info!("Server shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
