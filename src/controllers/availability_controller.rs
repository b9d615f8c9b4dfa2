use tracing::info;
use validator::Validate;

use crate::dto::availability_dto::{ApiResponse, AvailabilityQuery, AvailableVehicleResponse};
use crate::repositories::booking_repository::PgBookingRepository;
use crate::repositories::employee_repository::PgEmployeeRepository;
use crate::repositories::vehicle_repository::PgVehicleRepository;
use crate::services::availability_service::AvailabilityResolver;
use crate::state::AppState;
use crate::utils::errors::{AppError, AppResult};
use crate::utils::validation::parse_interval;

pub struct AvailabilityController {
    employee_repo: PgEmployeeRepository,
    vehicle_repo: PgVehicleRepository,
    booking_repo: PgBookingRepository,
    date_format: String,
}

impl AvailabilityController {
    pub fn new(state: AppState) -> Self {
        Self {
            employee_repo: PgEmployeeRepository::new(state.pool.clone()),
            vehicle_repo: PgVehicleRepository::new(state.pool.clone()),
            booking_repo: PgBookingRepository::new(state.pool.clone(), state.booking_table.clone()),
            date_format: state.config.date_format.clone(),
        }
    }

    /// Vehículos que el empleado puede usar y no están reservados en el
    /// intervalo pedido
    pub async fn get_availability(
        &self,
        request: AvailabilityQuery,
    ) -> AppResult<ApiResponse<Vec<AvailableVehicleResponse>>> {
        // USER_ID se rechaza antes de tocar cualquier almacén
        request.validate().map_err(|_| {
            AppError::Configuration("USER_ID debe ser un entero positivo".to_string())
        })?;

        let interval = parse_interval(
            request.from.as_deref(),
            request.to.as_deref(),
            &self.date_format,
        )?;

        let resolver = AvailabilityResolver::new(
            &self.employee_repo,
            &self.vehicle_repo,
            &self.booking_repo,
            request.user_id,
        );
        let available = resolver.resolve(&interval).await?;

        info!(
            "🚗 {} vehículos disponibles para USER_ID {}",
            available.len(),
            request.user_id
        );

        Ok(ApiResponse::success(
            available
                .into_iter()
                .map(AvailableVehicleResponse::from)
                .collect(),
        ))
    }
}
