//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos que mapean exactamente
//! al schema PostgreSQL con las convenciones estándar.

pub mod audit;
pub mod booking;
pub mod complaint;
pub mod payment;
pub mod review;
pub mod user;
pub mod vehicle;
