//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use sqlx::PgPool;

use crate::config::environment::EnvironmentConfig;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: EnvironmentConfig,
    /// Nombre de la tabla de reservas, resuelto al arrancar el servicio
    pub booking_table: String,
}

impl AppState {
    pub fn new(pool: PgPool, config: EnvironmentConfig, booking_table: String) -> Self {
        Self {
            pool,
            config,
            booking_table,
        }
    }
}
