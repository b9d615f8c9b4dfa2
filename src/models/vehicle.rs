//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle proyectado desde el catálogo
//! y la colección indexada que usa el cálculo de disponibilidad.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::collections::HashMap;

/// Vehículo del catálogo corporativo
///
/// `class` es nullable en la proyección: el catálogo puede contener filas
/// sin etiqueta de clase y se muestran igual.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    pub id: i64,
    pub name: String,
    pub driver: Option<String>,
    pub class: Option<String>,
}

/// Colección de vehículos en orden de catálogo con índice por id
///
/// Se consulta dos veces por request: para derivar el conjunto de ids
/// permitidos y para materializar los registros finales por id.
#[derive(Debug, Clone, Default)]
pub struct VehicleCollection {
    vehicles: Vec<Vehicle>,
    by_id: HashMap<i64, usize>,
}

impl VehicleCollection {
    pub fn new(vehicles: Vec<Vehicle>) -> Self {
        let by_id = vehicles
            .iter()
            .enumerate()
            .map(|(idx, vehicle)| (vehicle.id, idx))
            .collect();

        Self { vehicles, by_id }
    }

    /// Ids en el orden en que el catálogo devolvió los vehículos
    pub fn ids(&self) -> Vec<i64> {
        self.vehicles.iter().map(|vehicle| vehicle.id).collect()
    }

    pub fn get(&self, id: i64) -> Option<&Vehicle> {
        self.by_id.get(&id).map(|idx| &self.vehicles[*idx])
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vehicle(id: i64, name: &str) -> Vehicle {
        Vehicle {
            id,
            name: name.to_string(),
            driver: None,
            class: Some("sedan".to_string()),
        }
    }

    #[test]
    fn test_collection_preserves_order() {
        let collection =
            VehicleCollection::new(vec![vehicle(3, "Golf"), vehicle(1, "Camry"), vehicle(2, "Rio")]);

        assert_eq!(collection.ids(), vec![3, 1, 2]);
        assert_eq!(collection.len(), 3);
    }

    #[test]
    fn test_collection_lookup_by_id() {
        let collection = VehicleCollection::new(vec![vehicle(1, "Camry"), vehicle(2, "Rio")]);

        assert_eq!(collection.get(2).map(|v| v.name.as_str()), Some("Rio"));
        assert!(collection.get(99).is_none());
    }

    #[test]
    fn test_empty_collection() {
        let collection = VehicleCollection::new(vec![]);
        assert!(collection.is_empty());
        assert!(collection.ids().is_empty());
    }
}
