//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores del sistema
//! y su conversión a respuestas HTTP apropiadas.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Required date \"{field}\" is missing")]
    MissingDate { field: &'static str },

    #[error("Invalid date format for \"{field}\", expected: {expected}")]
    InvalidDateFormat {
        field: &'static str,
        expected: String,
    },

    #[error("Start date cannot be later than end date")]
    InvalidDateRange,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_response) = match self {
            AppError::MissingDate { field } => {
                tracing::warn!("Missing date field: {}", field);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        error: "Missing Date".to_string(),
                        message: format!("La fecha \"{}\" es requerida", field),
                        details: Some(json!({ "field": field })),
                        code: Some("MISSING_DATE".to_string()),
                    },
                )
            }

            AppError::InvalidDateFormat { field, expected } => {
                tracing::warn!("Invalid date format for field: {}", field);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        error: "Invalid Date Format".to_string(),
                        message: format!(
                            "Formato de fecha inválido para \"{}\". Esperado: {}",
                            field, expected
                        ),
                        details: Some(json!({ "field": field, "expected": expected })),
                        code: Some("INVALID_DATE_FORMAT".to_string()),
                    },
                )
            }

            AppError::InvalidDateRange => {
                tracing::warn!("Invalid date range: from > to");
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        error: "Invalid Date Range".to_string(),
                        message: "La fecha de inicio no puede ser posterior a la fecha de fin"
                            .to_string(),
                        details: None,
                        code: Some("INVALID_DATE_RANGE".to_string()),
                    },
                )
            }

            AppError::NotFound(msg) => {
                tracing::warn!("Resource not found: {}", msg);
                (
                    StatusCode::NOT_FOUND,
                    ErrorResponse {
                        error: "Not Found".to_string(),
                        message: msg,
                        details: None,
                        code: Some("NOT_FOUND".to_string()),
                    },
                )
            }

            AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    ErrorResponse {
                        error: "Dependency Unavailable".to_string(),
                        message: "Error al acceder al almacén de datos".to_string(),
                        details: Some(json!({ "sql_error": e.to_string() })),
                        code: Some("DEPENDENCY_UNAVAILABLE".to_string()),
                    },
                )
            }

            AppError::Configuration(msg) => {
                tracing::warn!("Configuration error: {}", msg);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        error: "Configuration Error".to_string(),
                        message: msg,
                        details: None,
                        code: Some("CONFIGURATION_ERROR".to_string()),
                    },
                )
            }

            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Internal Server Error".to_string(),
                        message: "Ocurrió un error inesperado".to_string(),
                        details: Some(json!({ "internal_error": msg })),
                        code: Some("INTERNAL_ERROR".to_string()),
                    },
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;
