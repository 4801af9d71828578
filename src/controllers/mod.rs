//! Controllers de la aplicación
//!
//! Los handlers de rutas delegan aquí; cada controller valida, consulta
//! al gate de autorización y llama a su repositorio.

pub mod audit_controller;
pub mod auth_controller;
pub mod booking_controller;
pub mod complaint_controller;
pub mod payment_controller;
pub mod review_controller;
pub mod vehicle_controller;
