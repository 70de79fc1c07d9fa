pub mod assignment;
pub mod clock;
pub mod config;
pub mod db;
pub mod errors;
mod http;
mod middleware;
pub mod models;
pub mod state;
pub mod summary;

use axum::{Router, http::StatusCode};
use clock::SystemClock;
use config::AppConfig;
use db::PgStore;
use errors::AppError;
use middleware::cors_layer;
use sqlx::postgres::PgPoolOptions;
use state::AppState;
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

pub fn create_app(state: AppState, allowed_origins: &[String]) -> Router {
    http::create_http_routes(state)
        .layer(cors_layer(allowed_origins))
        .layer(TraceLayer::new_for_http())
        .fallback(|| async { (StatusCode::NOT_FOUND, "404 Not Found") })
}

pub async fn start_server() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = AppConfig::from_env()?;

    let postgres = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to connect to database: {}", e)))?;

    sqlx::migrate!()
        .run(&postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to run migrations: {}", e)))?;

    let state = AppState::new(Arc::new(PgStore::new(postgres)), Arc::new(SystemClock));
    let app = create_app(state, &config.allowed_origins);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::EnvError(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("Volunteer scheduler running at http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| {
            tracing::error!("Server error: {}", e);
            AppError::InternalError
        })
}
