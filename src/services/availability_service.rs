//! Resolución de disponibilidad de vehículos corporativos
//!
//! El pipeline de un request es estrictamente secuencial: empleado →
//! clases permitidas → catálogo de vehículos → reservas solapadas →
//! diferencia de conjuntos. El resolver vive lo que dura el request y
//! memoiza las dos consultas que se reutilizan aguas abajo.
//!
//! La disponibilidad es una foto al momento de la consulta, no un lock:
//! una reserva concurrente posterior a esta lectura no se refleja.

use std::collections::HashSet;

use tracing::debug;

use crate::models::booking::RequestedInterval;
use crate::models::employee::Employee;
use crate::models::vehicle::{Vehicle, VehicleCollection};
use crate::repositories::{BookingStore, EmployeeStore, VehicleCatalogStore};
use crate::utils::errors::AppError;

/// Resolver de disponibilidad con caché por request
///
/// `employee` y `allowed` se llenan en el primer acceso y se descartan
/// con el resolver; cada almacén se consulta a lo sumo una vez.
pub struct AvailabilityResolver<'a, E, V, B> {
    employees: &'a E,
    vehicles: &'a V,
    bookings: &'a B,
    user_id: i64,
    employee: Option<Employee>,
    allowed: Option<VehicleCollection>,
}

impl<'a, E, V, B> AvailabilityResolver<'a, E, V, B>
where
    E: EmployeeStore,
    V: VehicleCatalogStore,
    B: BookingStore,
{
    pub fn new(employees: &'a E, vehicles: &'a V, bookings: &'a B, user_id: i64) -> Self {
        Self {
            employees,
            vehicles,
            bookings,
            user_id,
            employee: None,
            allowed: None,
        }
    }

    /// Calcular los vehículos disponibles para el intervalo solicitado
    ///
    /// El resultado conserva el orden de catálogo de los vehículos
    /// permitidos, menos los que tienen una reserva activa solapada.
    pub async fn resolve(
        mut self,
        interval: &RequestedInterval,
    ) -> Result<Vec<Vehicle>, AppError> {
        let allowed_ids = self.allowed_vehicles().await?.ids();
        let reserved = self.reserved_vehicle_ids(interval, &allowed_ids).await?;

        debug!(
            "Vehículos permitidos: {}, reservados en el intervalo: {}",
            allowed_ids.len(),
            reserved.len()
        );

        // Segunda consulta a la colección memoizada: materializar por id
        let collection = self.allowed_vehicles().await?;

        let mut available = Vec::new();
        for id in allowed_ids {
            if reserved.contains(&id) {
                continue;
            }

            let vehicle = collection.get(id).ok_or_else(|| {
                AppError::Internal(format!(
                    "el vehículo {} no está en la colección de permitidos",
                    id
                ))
            })?;

            available.push(vehicle.clone());
        }

        Ok(available)
    }

    /// Empleado del request, consultado una sola vez
    async fn employee(&mut self) -> Result<&Employee, AppError> {
        if self.employee.is_none() {
            let employee = self
                .employees
                .find_by_user_id(self.user_id)
                .await?
                .ok_or_else(|| AppError::NotFound("Empleado no encontrado".to_string()))?;

            debug!("Empleado resuelto: {} ({})", employee.name, employee.id);
            self.employee = Some(employee);
        }

        self.employee
            .as_ref()
            .ok_or_else(|| AppError::Internal("caché de empleado vacía".to_string()))
    }

    /// Clases de vehículo permitidas, deduplicadas y en orden estable
    async fn allowed_classes(&mut self) -> Result<Vec<String>, AppError> {
        let employee = self.employee().await?;
        Ok(employee.allowed_classes().into_iter().collect())
    }

    /// Catálogo de vehículos permitidos, consultado una sola vez
    ///
    /// Se consume dos veces por request: para derivar el conjunto de ids
    /// y para materializar los registros finales.
    async fn allowed_vehicles(&mut self) -> Result<&VehicleCollection, AppError> {
        if self.allowed.is_none() {
            let classes = self.allowed_classes().await?;
            let vehicles = self.vehicles.find_by_classes(&classes).await?;

            debug!(
                "Catálogo: {} vehículos para las clases {:?}",
                vehicles.len(),
                classes
            );
            self.allowed = Some(VehicleCollection::new(vehicles));
        }

        self.allowed
            .as_ref()
            .ok_or_else(|| AppError::Internal("caché de catálogo vacía".to_string()))
    }

    /// Ids de vehículos con reserva activa solapada al intervalo
    ///
    /// Sin candidatos no hay consulta: el resultado es vacío de antemano.
    async fn reserved_vehicle_ids(
        &self,
        interval: &RequestedInterval,
        allowed_ids: &[i64],
    ) -> Result<HashSet<i64>, AppError> {
        if allowed_ids.is_empty() {
            return Ok(HashSet::new());
        }

        let ids = self
            .bookings
            .find_overlapping_vehicle_ids(interval, allowed_ids)
            .await?;

        Ok(ids.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::{NaiveDate, NaiveDateTime};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct MockEmployeeStore {
        employee: Option<Employee>,
        calls: AtomicUsize,
    }

    impl MockEmployeeStore {
        fn with(employee: Option<Employee>) -> Self {
            Self {
                employee,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl EmployeeStore for MockEmployeeStore {
        async fn find_by_user_id(&self, _user_id: i64) -> Result<Option<Employee>, AppError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.employee.clone())
        }
    }

    struct MockVehicleStore {
        vehicles: Vec<Vehicle>,
        calls: AtomicUsize,
    }

    impl MockVehicleStore {
        fn with(vehicles: Vec<Vehicle>) -> Self {
            Self {
                vehicles,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl VehicleCatalogStore for MockVehicleStore {
        async fn find_by_classes(&self, classes: &[String]) -> Result<Vec<Vehicle>, AppError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self
                .vehicles
                .iter()
                .filter(|v| {
                    v.class
                        .as_ref()
                        .map_or(false, |class| classes.contains(class))
                })
                .cloned()
                .collect())
        }
    }

    struct MockBooking {
        vehicle_id: i64,
        date_from: NaiveDateTime,
        date_to: NaiveDateTime,
        active: bool,
    }

    struct MockBookingStore {
        bookings: Vec<MockBooking>,
        calls: AtomicUsize,
    }

    impl MockBookingStore {
        fn with(bookings: Vec<MockBooking>) -> Self {
            Self {
                bookings,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl BookingStore for MockBookingStore {
        async fn find_overlapping_vehicle_ids(
            &self,
            interval: &RequestedInterval,
            vehicle_ids: &[i64],
        ) -> Result<Vec<i64>, AppError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self
                .bookings
                .iter()
                .filter(|b| {
                    b.active
                        && interval.overlaps(b.date_from, b.date_to)
                        && vehicle_ids.contains(&b.vehicle_id)
                })
                .map(|b| b.vehicle_id)
                .collect())
        }
    }

    fn dt(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn interval() -> RequestedInterval {
        RequestedInterval::new(dt(10, 9), dt(10, 18)).unwrap()
    }

    fn employee(classes: &[&str]) -> Employee {
        Employee {
            id: 100,
            name: "E1".to_string(),
            position: Some("Gerente".to_string()),
            car_classes: classes.iter().map(|c| c.to_string()).collect(),
        }
    }

    fn vehicle(id: i64, name: &str, class: &str) -> Vehicle {
        Vehicle {
            id,
            name: name.to_string(),
            driver: None,
            class: Some(class.to_string()),
        }
    }

    fn booking(vehicle_id: i64, from: NaiveDateTime, to: NaiveDateTime) -> MockBooking {
        MockBooking {
            vehicle_id,
            date_from: from,
            date_to: to,
            active: true,
        }
    }

    #[tokio::test]
    async fn test_employee_not_found_short_circuits() {
        let employees = MockEmployeeStore::with(None);
        let vehicles = MockVehicleStore::with(vec![vehicle(1, "Camry", "sedan")]);
        let bookings = MockBookingStore::with(vec![]);

        let resolver = AvailabilityResolver::new(&employees, &vehicles, &bookings, 1);
        let result = resolver.resolve(&interval()).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert_eq!(vehicles.calls.load(Ordering::SeqCst), 0);
        assert_eq!(bookings.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_empty_class_set_yields_empty_result() {
        let employees = MockEmployeeStore::with(Some(employee(&[])));
        let vehicles = MockVehicleStore::with(vec![vehicle(1, "Camry", "sedan")]);
        let bookings = MockBookingStore::with(vec![]);

        let resolver = AvailabilityResolver::new(&employees, &vehicles, &bookings, 1);
        let available = resolver.resolve(&interval()).await.unwrap();

        assert!(available.is_empty());
        // El catálogo se consulta con el conjunto vacío y devuelve vacío;
        // sin candidatos, el almacén de reservas nunca se toca
        assert_eq!(vehicles.calls.load(Ordering::SeqCst), 1);
        assert_eq!(bookings.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_each_store_queried_at_most_once_per_request() {
        let employees = MockEmployeeStore::with(Some(employee(&["sedan"])));
        let vehicles = MockVehicleStore::with(vec![
            vehicle(1, "Camry", "sedan"),
            vehicle(2, "Jetta", "sedan"),
        ]);
        let bookings = MockBookingStore::with(vec![booking(2, dt(10, 10), dt(10, 12))]);

        let resolver = AvailabilityResolver::new(&employees, &vehicles, &bookings, 1);
        resolver.resolve(&interval()).await.unwrap();

        assert_eq!(employees.calls.load(Ordering::SeqCst), 1);
        assert_eq!(vehicles.calls.load(Ordering::SeqCst), 1);
        assert_eq!(bookings.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_repeated_resolution_returns_memoized_value() {
        let employees = MockEmployeeStore::with(Some(employee(&["sedan"])));
        let vehicles = MockVehicleStore::with(vec![]);
        let bookings = MockBookingStore::with(vec![]);

        let mut resolver = AvailabilityResolver::new(&employees, &vehicles, &bookings, 1);

        let first = resolver.employee().await.unwrap().clone();
        let second = resolver.employee().await.unwrap().clone();

        assert_eq!(first.id, second.id);
        assert_eq!(first.car_classes, second.car_classes);
        assert_eq!(employees.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_set_difference_preserves_catalog_order() {
        let employees = MockEmployeeStore::with(Some(employee(&["sedan"])));
        let vehicles = MockVehicleStore::with(vec![
            vehicle(1, "A", "sedan"),
            vehicle(2, "B", "sedan"),
            vehicle(3, "C", "sedan"),
        ]);
        let bookings = MockBookingStore::with(vec![booking(2, dt(10, 10), dt(10, 11))]);

        let resolver = AvailabilityResolver::new(&employees, &vehicles, &bookings, 1);
        let available = resolver.resolve(&interval()).await.unwrap();

        let ids: Vec<i64> = available.iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[tokio::test]
    async fn test_booking_starting_at_interval_end_excludes_vehicle() {
        let employees = MockEmployeeStore::with(Some(employee(&["sedan"])));
        let vehicles = MockVehicleStore::with(vec![vehicle(1, "Camry", "sedan")]);
        // La reserva arranca justo cuando termina el intervalo pedido
        let bookings = MockBookingStore::with(vec![booking(1, dt(10, 18), dt(11, 10))]);

        let resolver = AvailabilityResolver::new(&employees, &vehicles, &bookings, 1);
        let available = resolver.resolve(&interval()).await.unwrap();

        assert!(available.is_empty());
    }

    #[tokio::test]
    async fn test_booking_ending_at_interval_start_excludes_vehicle() {
        let employees = MockEmployeeStore::with(Some(employee(&["sedan"])));
        let vehicles = MockVehicleStore::with(vec![vehicle(1, "Camry", "sedan")]);
        let bookings = MockBookingStore::with(vec![booking(1, dt(9, 8), dt(10, 9))]);

        let resolver = AvailabilityResolver::new(&employees, &vehicles, &bookings, 1);
        let available = resolver.resolve(&interval()).await.unwrap();

        assert!(available.is_empty());
    }

    #[tokio::test]
    async fn test_inactive_booking_is_ignored() {
        let employees = MockEmployeeStore::with(Some(employee(&["sedan"])));
        let vehicles = MockVehicleStore::with(vec![vehicle(1, "Camry", "sedan")]);
        let bookings = MockBookingStore::with(vec![MockBooking {
            vehicle_id: 1,
            date_from: dt(10, 10),
            date_to: dt(10, 12),
            active: false,
        }]);

        let resolver = AvailabilityResolver::new(&employees, &vehicles, &bookings, 1);
        let available = resolver.resolve(&interval()).await.unwrap();

        assert_eq!(available.len(), 1);
        assert_eq!(available[0].id, 1);
    }

    #[tokio::test]
    async fn test_vehicles_outside_allowed_classes_are_filtered() {
        let employees = MockEmployeeStore::with(Some(employee(&["sedan"])));
        let vehicles = MockVehicleStore::with(vec![
            vehicle(1, "Camry", "sedan"),
            vehicle(2, "Land Cruiser", "suv"),
        ]);
        let bookings = MockBookingStore::with(vec![]);

        let resolver = AvailabilityResolver::new(&employees, &vehicles, &bookings, 1);
        let available = resolver.resolve(&interval()).await.unwrap();

        let ids: Vec<i64> = available.iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[tokio::test]
    async fn test_sedan_scenario() {
        // E1 con clase "sedan", dos sedanes en catálogo, el 2 reservado
        // entre las 09:00 y las 18:00 del 10.01.2024
        let employees = MockEmployeeStore::with(Some(employee(&["sedan"])));
        let vehicles = MockVehicleStore::with(vec![
            vehicle(1, "Camry", "sedan"),
            vehicle(2, "Jetta", "sedan"),
        ]);
        let bookings = MockBookingStore::with(vec![booking(2, dt(10, 12), dt(10, 14))]);

        let resolver = AvailabilityResolver::new(&employees, &vehicles, &bookings, 1);
        let available = resolver.resolve(&interval()).await.unwrap();

        assert_eq!(available.len(), 1);
        assert_eq!(available[0].id, 1);
        assert_eq!(available[0].name, "Camry");
    }

    #[tokio::test]
    async fn test_no_overlaps_returns_full_catalog() {
        let employees = MockEmployeeStore::with(Some(employee(&["sedan", "suv"])));
        let vehicles = MockVehicleStore::with(vec![
            vehicle(1, "Camry", "sedan"),
            vehicle(2, "Land Cruiser", "suv"),
        ]);
        let bookings = MockBookingStore::with(vec![booking(1, dt(20, 9), dt(20, 18))]);

        let resolver = AvailabilityResolver::new(&employees, &vehicles, &bookings, 1);
        let available = resolver.resolve(&interval()).await.unwrap();

        let ids: Vec<i64> = available.iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_duplicate_classes_collapse_before_catalog_query() {
        let employees = MockEmployeeStore::with(Some(employee(&["sedan", "sedan", "suv"])));
        let vehicles = MockVehicleStore::with(vec![vehicle(1, "Camry", "sedan")]);
        let bookings = MockBookingStore::with(vec![]);

        let mut resolver = AvailabilityResolver::new(&employees, &vehicles, &bookings, 1);
        let classes = resolver.allowed_classes().await.unwrap();

        assert_eq!(classes, vec!["sedan".to_string(), "suv".to_string()]);
    }
}
