//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación del intervalo
//! solicitado y conversión de fechas.

use chrono::NaiveDateTime;

use crate::models::booking::RequestedInterval;
use crate::utils::errors::AppError;

/// Validar y convertir las fechas crudas del request a un intervalo
///
/// Ambas fechas son obligatorias y deben respetar el formato configurado.
/// El intervalo resultante garantiza `from <= to`.
pub fn parse_interval(
    raw_from: Option<&str>,
    raw_to: Option<&str>,
    format: &str,
) -> Result<RequestedInterval, AppError> {
    let from = parse_date_field(raw_from, "from", format)?;
    let to = parse_date_field(raw_to, "to", format)?;

    RequestedInterval::new(from, to)
}

/// Validar y convertir un campo de fecha individual
fn parse_date_field(
    value: Option<&str>,
    field: &'static str,
    format: &str,
) -> Result<NaiveDateTime, AppError> {
    let value = value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or(AppError::MissingDate { field })?;

    NaiveDateTime::parse_from_str(value, format).map_err(|_| AppError::InvalidDateFormat {
        field,
        expected: human_date_format(format),
    })
}

/// Convertir un patrón de chrono a su representación legible
/// (`%d.%m.%Y %H:%M:%S` -> `DD.MM.YYYY HH:MM:SS`)
pub fn human_date_format(format: &str) -> String {
    let mut result = String::with_capacity(format.len());
    let mut chars = format.chars();

    while let Some(c) = chars.next() {
        if c != '%' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('d') => result.push_str("DD"),
            Some('m') => result.push_str("MM"),
            Some('Y') => result.push_str("YYYY"),
            Some('y') => result.push_str("YY"),
            Some('H') => result.push_str("HH"),
            Some('M') => result.push_str("MM"),
            Some('S') => result.push_str("SS"),
            Some('%') => result.push('%'),
            Some(other) => {
                result.push('%');
                result.push(other);
            }
            None => result.push('%'),
        }
    }

    result
}
