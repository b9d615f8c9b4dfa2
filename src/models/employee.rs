//! Modelo de Employee
//!
//! Un empleado referencia su puesto y, a través de él, las clases de
//! vehículo que tiene permitidas. La proyección se arma con LEFT JOINs:
//! un empleado sin puesto o sin clases asignadas obtiene un listado vacío,
//! nunca un error.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::collections::BTreeSet;

/// Empleado con sus clases de vehículo permitidas ya proyectadas
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub position: Option<String>,
    pub car_classes: Vec<String>,
}

impl Employee {
    /// Clases permitidas como conjunto: los duplicados colapsan y el
    /// orden de llegada deja de importar.
    pub fn allowed_classes(&self) -> BTreeSet<String> {
        self.car_classes.iter().cloned().collect()
    }
}
