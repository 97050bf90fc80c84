use axum::extract::State;
use axum::{routing::get, Json, Router};
use galley_db::repositories::HotelRepo;
use serde::Serialize;

use crate::state::AppState;

/// Hotel registry summary. Every tenant request resolves through it.
#[derive(Serialize)]
pub struct RegistryStatus {
    pub hotels: i64,
    pub dedicated_schemas: i64,
}

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok` when the database and hotel registry are both readable.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the database is reachable.
    pub db_healthy: bool,
    /// `None` when the registry could not be read.
    pub registry: Option<RegistryStatus>,
}

/// GET /health -- database reachability plus a hotel registry summary.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = galley_db::health_check(&state.pool).await.is_ok();

    let registry = if db_healthy {
        match HotelRepo::registry_counts(&state.pool).await {
            Ok((hotels, dedicated_schemas)) => Some(RegistryStatus {
                hotels,
                dedicated_schemas,
            }),
            Err(e) => {
                tracing::warn!(error = %e, "Hotel registry unreadable");
                None
            }
        }
    } else {
        None
    };

    let status = if registry.is_some() { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        registry,
    })
}

/// Mounted at the root, outside the authenticated `/api/v1` tree.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
