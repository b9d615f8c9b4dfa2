//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de
//! configuración.

use std::env;

/// Nombre lógico de la tabla de reservas
pub const CAR_BOOKING_TABLE_NAME: &str = "cars_booking";

/// Identificador numérico conocido del bloque de reservas, usado para
/// derivar el nombre físico de respaldo cuando la tabla lógica no existe
pub const CAR_BOOKING_BLOCK_ID: u32 = 7;

/// Formato de fecha del despliegue (patrón de chrono)
pub const DEFAULT_DATE_FORMAT: &str = "%d.%m.%Y %H:%M:%S";

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub date_format: String,
    pub booking_table: String,
    pub booking_block_id: u32,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            cors_origins: env::var("CORS_ORIGINS")
                .map(|v| {
                    v.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            date_format: env::var("DATE_FORMAT")
                .unwrap_or_else(|_| DEFAULT_DATE_FORMAT.to_string()),
            booking_table: env::var("BOOKING_TABLE")
                .unwrap_or_else(|_| CAR_BOOKING_TABLE_NAME.to_string()),
            booking_block_id: env::var("BOOKING_BLOCK_ID")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(CAR_BOOKING_BLOCK_ID),
        }
    }
}

impl EnvironmentConfig {
    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Obtener la URL del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Nombre físico de respaldo para la tabla de reservas
    pub fn booking_fallback_table(&self) -> String {
        format!("b_hlbd_{}", self.booking_block_id)
    }
}
