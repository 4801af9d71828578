//! Modelo de User
//!
//! Este módulo contiene el struct User y el enum de roles.
//! Mapea exactamente al schema PostgreSQL con primary key 'id'.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;

/// Rol del usuario - mapea al ENUM user_role
///
/// Variante cerrada: cualquier decisión basada en rol pasa por los
/// métodos de capacidad de abajo (ver utils::authorization), nunca por
/// comparaciones sueltas en los endpoints.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Vendor,
    Customer,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Vendor => "vendor",
            UserRole::Customer => "customer",
        }
    }

    /// Acceso administrativo total
    pub fn can_administer(&self) -> bool {
        matches!(self, UserRole::Admin)
    }

    /// Alta y gestión de vehículos
    pub fn can_manage_fleet(&self) -> bool {
        matches!(self, UserRole::Admin | UserRole::Vendor)
    }

    /// Creación de reservas
    pub fn can_book(&self) -> bool {
        matches!(self, UserRole::Customer)
    }

    /// Roles que puede elegir un usuario al registrarse. Los admins se
    /// crean fuera del registro público.
    pub fn self_registrable(&self) -> bool {
        matches!(self, UserRole::Vendor | UserRole::Customer)
    }
}

/// User - mapea exactamente a la tabla users
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_capabilities() {
        assert!(UserRole::Admin.can_administer());
        assert!(UserRole::Admin.can_manage_fleet());
        assert!(!UserRole::Admin.can_book());

        assert!(!UserRole::Vendor.can_administer());
        assert!(UserRole::Vendor.can_manage_fleet());

        assert!(UserRole::Customer.can_book());
        assert!(!UserRole::Customer.can_manage_fleet());
    }

    #[test]
    fn test_role_as_str() {
        assert_eq!(UserRole::Vendor.as_str(), "vendor");
    }

    #[test]
    fn test_admin_cannot_self_register() {
        assert!(!UserRole::Admin.self_registrable());
        assert!(UserRole::Vendor.self_registrable());
        assert!(UserRole::Customer.self_registrable());
    }
}
