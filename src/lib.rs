//! TexFab API Library
//!
//! Master-data management backend for a textile manufacturing business:
//! user accounts, jobbers, materials with kind-specific detail, trading
//! parties, storage locations, firm profiles and owner-scoped lookups.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

pub mod auth;
pub mod config;
pub mod db;
pub mod entities;
pub mod errors;
pub mod handlers;
pub mod migrator;
pub mod models;
pub mod openapi;
pub mod services;
pub mod storage;
pub mod validators;

use axum::{extract::State, response::Json, routing::get, Router};
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::db::DbPool;
use crate::errors::ServiceError;

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DbPool>,
    pub config: config::AppConfig,
    pub auth: Arc<auth::AuthService>,
    pub services: services::AppServices,
}

/// The full `/api/v1` surface: auth, profile and user directory, the
/// master-data groups, and the owner-scoped lookup utilities.
pub fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .route("/status", get(api_status))
        .route("/health", get(health_check))
        .nest("/auth", handlers::auth::auth_routes())
        .nest("/profile", handlers::users::profile_routes())
        .nest("/users", handlers::users::user_routes())
        .nest("/master/jobbers", handlers::jobbers::jobber_routes())
        .nest(
            "/master/jobber-types",
            handlers::jobbers::jobber_type_routes(),
        )
        .nest("/master/materials", handlers::materials::material_routes())
        .nest("/master/parties", handlers::parties::party_routes())
        .nest("/master/locations", handlers::locations::location_routes())
        .nest("/master/firm", handlers::firms::firm_routes())
        .nest(
            "/utilities/material-types",
            handlers::lookups::material_type_routes(),
        )
        .nest(
            "/utilities/material-shades",
            handlers::lookups::material_shade_routes(),
        )
}

/// Assemble the application router: the v1 API, the Swagger UI mount and
/// request tracing. Cross-cutting layers that depend on deployment config
/// (CORS, compression) are applied by the binary on top of this.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { "texfab-api up" }))
        .nest("/api/v1", api_v1_routes())
        .merge(openapi::swagger_ui())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn api_status(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "texfab-api",
        "version": env!("CARGO_PKG_VERSION"),
        "environment": state.config.environment,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, ServiceError> {
    let db_status = match state.db.ping().await {
        Ok(_) => "healthy",
        Err(_) => "unhealthy",
    };

    Ok(Json(json!({
        "status": db_status,
        "checks": {
            "database": db_status,
        },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    })))
}
