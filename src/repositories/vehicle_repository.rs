use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::vehicle::Vehicle;
use crate::utils::errors::AppError;

/// Catálogo de vehículos corporativos
#[async_trait]
pub trait VehicleCatalogStore: Send + Sync {
    /// Vehículos cuya clase pertenece al conjunto dado, en orden estable
    /// de catálogo. Un conjunto vacío devuelve una lista vacía.
    async fn find_by_classes(&self, classes: &[String]) -> Result<Vec<Vehicle>, AppError>;
}

pub struct PgVehicleRepository {
    pool: PgPool,
}

impl PgVehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VehicleCatalogStore for PgVehicleRepository {
    async fn find_by_classes(&self, classes: &[String]) -> Result<Vec<Vehicle>, AppError> {
        // `= ANY('{}')` no matchea filas, así que un conjunto vacío de
        // clases devuelve un catálogo vacío sin caso especial
        let vehicles = sqlx::query_as::<_, Vehicle>(
            r#"
            SELECT v.id,
                   v.name,
                   d.name AS driver,
                   v.car_class AS class
            FROM vehicles v
            LEFT JOIN employees d ON d.id = v.driver_id
            WHERE v.car_class = ANY($1)
            ORDER BY v.id
            "#,
        )
        .bind(classes)
        .fetch_all(&self.pool)
        .await?;

        Ok(vehicles)
    }
}
