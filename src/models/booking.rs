//! Intervalo solicitado y semántica de solapamiento de reservas
//!
//! Las reservas almacenadas son externas al servicio; aquí solo vive el
//! intervalo validado del request y el predicado de solapamiento que la
//! consulta de reservas replica en SQL.

use chrono::NaiveDateTime;

use crate::utils::errors::AppError;

/// Intervalo de fechas solicitado, con `from <= to` garantizado
/// por construcción
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestedInterval {
    from: NaiveDateTime,
    to: NaiveDateTime,
}

impl RequestedInterval {
    pub fn new(from: NaiveDateTime, to: NaiveDateTime) -> Result<Self, AppError> {
        if from > to {
            return Err(AppError::InvalidDateRange);
        }

        Ok(Self { from, to })
    }

    pub fn date_from(&self) -> NaiveDateTime {
        self.from
    }

    pub fn date_to(&self) -> NaiveDateTime {
        self.to
    }

    /// Una reserva solapa el intervalo si `date_from <= to` y
    /// `date_to >= from`. Los bordes son inclusivos: intervalos que
    /// apenas se tocan cuentan como solapados.
    pub fn overlaps(&self, date_from: NaiveDateTime, date_to: NaiveDateTime) -> bool {
        date_from <= self.to && date_to >= self.from
    }
}
