use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};

use crate::controllers::availability_controller::AvailabilityController;
use crate::dto::availability_dto::{ApiResponse, AvailabilityQuery, AvailableVehicleResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_availability_router() -> Router<AppState> {
    Router::new().route("/", get(get_availability))
}

async fn get_availability(
    State(state): State<AppState>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<ApiResponse<Vec<AvailableVehicleResponse>>>, AppError> {
    let controller = AvailabilityController::new(state);
    let response = controller.get_availability(query).await?;
    Ok(Json(response))
}
