use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::booking::RequestedInterval;
use crate::utils::errors::AppError;

/// Almacén de reservas de vehículos
#[async_trait]
pub trait BookingStore: Send + Sync {
    /// Ids de vehículos con una reserva activa que solapa el intervalo,
    /// restringido al conjunto de candidatos. Lectura pura: no bloquea
    /// ni modifica reservas.
    async fn find_overlapping_vehicle_ids(
        &self,
        interval: &RequestedInterval,
        vehicle_ids: &[i64],
    ) -> Result<Vec<i64>, AppError>;
}

pub struct PgBookingRepository {
    pool: PgPool,
    table: String,
}

impl PgBookingRepository {
    /// `table` viene ya resuelta por configuración al arrancar el servicio
    pub fn new(pool: PgPool, table: String) -> Self {
        Self { pool, table }
    }
}

#[async_trait]
impl BookingStore for PgBookingRepository {
    async fn find_overlapping_vehicle_ids(
        &self,
        interval: &RequestedInterval,
        vehicle_ids: &[i64],
    ) -> Result<Vec<i64>, AppError> {
        // Bordes inclusivos: date_from <= to AND date_to >= from,
        // el mismo predicado que RequestedInterval::overlaps
        let query = format!(
            r#"
            SELECT DISTINCT vehicle_id
            FROM {}
            WHERE active = TRUE
              AND date_from <= $1
              AND date_to >= $2
              AND vehicle_id = ANY($3)
            "#,
            self.table
        );

        let ids = sqlx::query_scalar::<_, i64>(&query)
            .bind(interval.date_to())
            .bind(interval.date_from())
            .bind(vehicle_ids)
            .fetch_all(&self.pool)
            .await?;

        Ok(ids)
    }
}
