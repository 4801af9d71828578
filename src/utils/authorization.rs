//! Gate de autorización centralizado
//!
//! Todas las comprobaciones de rol/propiedad pasan por este módulo.
//! Los controllers nunca comparan roles directamente; piden permiso aquí
//! y reciben un `Forbidden` uniforme cuando no procede.

use uuid::Uuid;

use crate::middleware::auth::AuthenticatedUser;
use crate::models::user::UserRole;
use crate::utils::errors::AppError;

/// Verificar que el requester es administrador
pub fn ensure_admin(requester: &AuthenticatedUser) -> Result<(), AppError> {
    if !requester.role.can_administer() {
        return Err(AppError::Forbidden(
            "Se requieren permisos de administrador".to_string(),
        ));
    }
    Ok(())
}

/// Verificar que el requester puede gestionar flota (vendor o admin)
pub fn ensure_fleet_manager(requester: &AuthenticatedUser) -> Result<(), AppError> {
    if !requester.role.can_manage_fleet() {
        return Err(AppError::Forbidden(
            "Solo vendors o administradores pueden gestionar vehículos".to_string(),
        ));
    }
    Ok(())
}

/// Verificar que el requester puede crear reservas
pub fn ensure_can_book(requester: &AuthenticatedUser) -> Result<(), AppError> {
    if !requester.role.can_book() {
        return Err(AppError::Forbidden(
            "Solo los clientes pueden crear reservas".to_string(),
        ));
    }
    Ok(())
}

/// Verificar acceso a una reserva: el cliente propietario o un admin
pub fn ensure_booking_access(
    requester: &AuthenticatedUser,
    owner_customer_id: Uuid,
) -> Result<(), AppError> {
    if requester.role.can_administer() || requester.user_id == owner_customer_id {
        return Ok(());
    }
    Err(AppError::Forbidden(
        "No tienes permiso para acceder a esta reserva".to_string(),
    ))
}

/// Verificar propiedad de un vehículo: el vendor propietario o un admin
pub fn ensure_vehicle_owner(
    requester: &AuthenticatedUser,
    vendor_id: Uuid,
) -> Result<(), AppError> {
    if requester.role.can_administer() || requester.user_id == vendor_id {
        return Ok(());
    }
    Err(AppError::Forbidden(
        "No tienes permiso para modificar este vehículo".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: UserRole) -> AuthenticatedUser {
        AuthenticatedUser {
            user_id: Uuid::new_v4(),
            role,
        }
    }

    #[test]
    fn test_admin_passes_every_gate() {
        let admin = user(UserRole::Admin);
        assert!(ensure_admin(&admin).is_ok());
        assert!(ensure_fleet_manager(&admin).is_ok());
        assert!(ensure_booking_access(&admin, Uuid::new_v4()).is_ok());
        assert!(ensure_vehicle_owner(&admin, Uuid::new_v4()).is_ok());
    }

    #[test]
    fn test_customer_cannot_manage_fleet() {
        let customer = user(UserRole::Customer);
        assert!(ensure_fleet_manager(&customer).is_err());
        assert!(ensure_can_book(&customer).is_ok());
    }

    #[test]
    fn test_vendor_cannot_book_but_manages_fleet() {
        let vendor = user(UserRole::Vendor);
        assert!(ensure_can_book(&vendor).is_err());
        assert!(ensure_fleet_manager(&vendor).is_ok());
        assert!(ensure_admin(&vendor).is_err());
    }

    #[test]
    fn test_owner_accesses_own_booking_only() {
        let customer = user(UserRole::Customer);
        assert!(ensure_booking_access(&customer, customer.user_id).is_ok());
        assert!(ensure_booking_access(&customer, Uuid::new_v4()).is_err());
    }
}
