//! Utilidades del sistema
//!
//! Este módulo contiene utilidades para manejo de errores, validación,
//! JWT, contraseñas y el gate de autorización.

pub mod authorization;
pub mod errors;
pub mod jwt;
pub mod password;
pub mod validation;
