use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::employee::Employee;
use crate::utils::errors::AppError;

/// Almacén de empleados
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// Buscar un empleado por su referencia de usuario externa,
    /// con las clases de vehículo permitidas de su puesto ya proyectadas
    async fn find_by_user_id(&self, user_id: i64) -> Result<Option<Employee>, AppError>;
}

pub struct PgEmployeeRepository {
    pool: PgPool,
}

impl PgEmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeStore for PgEmployeeRepository {
    async fn find_by_user_id(&self, user_id: i64) -> Result<Option<Employee>, AppError> {
        // LEFT JOINs: un empleado sin puesto o sin clases asignadas
        // proyecta un array vacío, no un error
        let employee = sqlx::query_as::<_, Employee>(
            r#"
            SELECT e.id,
                   e.name,
                   p.name AS position,
                   COALESCE(
                       ARRAY_AGG(pc.car_class) FILTER (WHERE pc.car_class IS NOT NULL),
                       '{}'
                   ) AS car_classes
            FROM employees e
            LEFT JOIN positions p ON p.id = e.position_id
            LEFT JOIN position_car_classes pc ON pc.position_id = p.id
            WHERE e.user_id = $1
            GROUP BY e.id, e.name, p.name
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(employee)
    }
}
