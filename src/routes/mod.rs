//! Rutas HTTP
//!
//! Monta los routers de cada entidad bajo `/api/v2` y las capas comunes.

pub mod entity_routes;

use axum::{middleware, response::Json, routing::get, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::middleware::security_headers_middleware;
use crate::state::AppState;

pub use entity_routes::create_entity_router;

/// Crear el router principal de la API
pub fn create_api_router(state: &AppState) -> Router {
    let environment = state.config.environment.clone();

    Router::new()
        .route("/health", get(move || health_check(environment.clone())))
        // Los programas no exponen /active ni /inactive
        .nest("/api/v2/programs", create_entity_router(state.programs.clone(), false))
        .nest("/api/v2/routes", create_entity_router(state.routes.clone(), true))
        .nest("/api/v2/schedules", create_entity_router(state.schedules.clone(), true))
        .nest("/api/v2/fare", create_entity_router(state.fares.clone(), true))
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(TraceLayer::new_for_http())
}

/// Endpoint de salud simple
async fn health_check(environment: String) -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": "ms-distribution",
        "environment": environment,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
