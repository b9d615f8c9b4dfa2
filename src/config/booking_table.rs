//! Resolución del nombre de la tabla de reservas
//!
//! La tabla de reservas se ubica por su nombre lógico configurado. Si la
//! relación no existe en la base (inconsistencia entre entornos), se usa
//! el nombre físico derivado del identificador numérico conocido. La
//! resolución ocurre una sola vez al arrancar; las consultas reciben el
//! nombre ya decidido.

use sqlx::PgPool;

use crate::config::environment::EnvironmentConfig;

/// Resolver el nombre de la tabla de reservas contra la base
pub async fn resolve_booking_table(pool: &PgPool, config: &EnvironmentConfig) -> String {
    let exists = sqlx::query_scalar::<_, bool>("SELECT to_regclass($1::text) IS NOT NULL")
        .bind(&config.booking_table)
        .fetch_one(pool)
        .await;

    match exists {
        Ok(true) => config.booking_table.clone(),
        Ok(false) => {
            // fix para entornos donde la tabla lógica no está registrada
            let fallback = config.booking_fallback_table();
            log::warn!(
                "La tabla de reservas '{}' no existe, usando respaldo '{}'",
                config.booking_table,
                fallback
            );
            fallback
        }
        Err(e) => {
            log::warn!(
                "No se pudo verificar la tabla de reservas '{}': {}",
                config.booking_table,
                e
            );
            config.booking_table.clone()
        }
    }
}
