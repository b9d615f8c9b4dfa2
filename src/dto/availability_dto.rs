use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::vehicle::Vehicle;

// Query params para consultar disponibilidad
#[derive(Debug, Deserialize, Validate)]
pub struct AvailabilityQuery {
    #[validate(range(min = 1))]
    pub user_id: i64,
    pub from: Option<String>,
    pub to: Option<String>,
}

// Response de vehículo disponible
#[derive(Debug, Serialize)]
pub struct AvailableVehicleResponse {
    pub id: i64,
    pub name: String,
    pub driver: Option<String>,
    pub class: Option<String>,
}

impl From<Vehicle> for AvailableVehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            name: vehicle.name,
            driver: vehicle.driver,
            class: vehicle.class,
        }
    }
}

// Response genérica
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }
}
