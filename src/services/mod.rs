//! Services module
//!
//! Este módulo contiene la lógica de negocio de la aplicación.

pub mod availability_service;

pub use availability_service::*;
