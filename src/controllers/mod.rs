//! Controllers de la API
//!
//! Orquestan la validación de entrada y la lógica de negocio para cada
//! endpoint.

pub mod availability_controller;
