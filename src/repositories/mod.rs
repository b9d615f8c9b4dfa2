//! Repositorios de acceso a datos
//!
//! Cada almacén externo se consume a través de un trait angosto de solo
//! lectura; las implementaciones concretas van contra PostgreSQL.

pub mod booking_repository;
pub mod employee_repository;
pub mod vehicle_repository;

pub use booking_repository::BookingStore;
pub use employee_repository::EmployeeStore;
pub use vehicle_repository::VehicleCatalogStore;
