//! Repositorios de acceso a datos
//!
//! Capa fina sobre sqlx: cada repositorio mapea directamente a su tabla.
//! Las operaciones que participan en el flujo check-then-insert reciben
//! la transacción abierta por el caller.

pub mod audit_repository;
pub mod booking_repository;
pub mod complaint_repository;
pub mod payment_repository;
pub mod review_repository;
pub mod user_repository;
pub mod vehicle_repository;
