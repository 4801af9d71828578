//! Services module
//!
//! Este módulo contiene la lógica de negocio pura de la aplicación.
//! El comprobador de disponibilidad vive aquí para poder testearlo
//! sin base de datos.

pub mod audit_trail;
pub mod availability;
