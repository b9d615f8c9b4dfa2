//! Disponibilidad de vehículos de la flota corporativa
//!
//! Dado un empleado y un intervalo de fechas, el servicio calcula qué
//! vehículos puede usar según las clases permitidas de su puesto y cuáles
//! de esos no tienen una reserva activa solapada al intervalo.

pub mod config;
pub mod controllers;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

use axum::{response::Json, routing::get, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;

use middleware::cors::{cors_middleware, cors_middleware_with_origins};
use state::AppState;

/// Armar el router completo de la aplicación
pub fn create_app(state: AppState) -> Router {
    let cors = if state.config.cors_origins.is_empty() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(state.config.cors_origins.clone())
    };

    Router::new()
        .route("/health", get(health))
        .nest(
            "/api/availability",
            routes::availability_routes::create_availability_router(),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Health check del servicio
async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "service": "corporate-fleet",
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
