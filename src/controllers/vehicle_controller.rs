//! Controller de vehículos
//!
//! CRUD de flota. El campo status del vehículo es informativo: el borrado
//! sí se bloquea mientras existan reservas activas, pero la
//! disponibilidad por fechas la decide siempre el booking controller.

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::common::ApiResponse;
use crate::dto::vehicle_dto::{CreateVehicleRequest, UpdateVehicleRequest, VehicleResponse};
use crate::middleware::auth::AuthenticatedUser;
use crate::repositories::booking_repository::BookingRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::authorization;
use crate::utils::errors::AppError;
use crate::utils::validation::{validate_license_plate, validate_positive};

pub struct VehicleController {
    repository: VehicleRepository,
    bookings: BookingRepository,
}

impl VehicleController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VehicleRepository::new(pool.clone()),
            bookings: BookingRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        requester: &AuthenticatedUser,
        request: CreateVehicleRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        authorization::ensure_fleet_manager(requester)?;
        request.validate()?;

        if validate_license_plate(&request.license_plate).is_err() {
            return Err(AppError::InvalidArgument(
                "Formato de matrícula inválido".to_string(),
            ));
        }

        if validate_positive(request.price_per_day).is_err() {
            return Err(AppError::InvalidArgument(
                "El precio por día debe ser positivo".to_string(),
            ));
        }

        if self
            .repository
            .license_plate_exists(&request.license_plate)
            .await?
        {
            return Err(AppError::Conflict(
                "La matrícula ya está registrada".to_string(),
            ));
        }

        let vehicle = self
            .repository
            .create(
                requester.user_id,
                request.brand,
                request.model,
                request.license_plate,
                request.price_per_day,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            vehicle.into(),
            "Vehículo creado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<VehicleResponse, AppError> {
        let vehicle = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        Ok(vehicle.into())
    }

    /// Listar el catálogo completo; los vendors ven solo su flota
    pub async fn list(
        &self,
        requester: &AuthenticatedUser,
    ) -> Result<Vec<VehicleResponse>, AppError> {
        let vehicles = if requester.role.can_manage_fleet() && !requester.role.can_administer() {
            self.repository.list_by_vendor(requester.user_id).await?
        } else {
            self.repository.list().await?
        };

        Ok(vehicles.into_iter().map(VehicleResponse::from).collect())
    }

    pub async fn update(
        &self,
        requester: &AuthenticatedUser,
        id: Uuid,
        request: UpdateVehicleRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        request.validate()?;

        let vehicle = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        authorization::ensure_vehicle_owner(requester, vehicle.vendor_id)?;

        if let Some(price) = request.price_per_day {
            if validate_positive(price).is_err() {
                return Err(AppError::InvalidArgument(
                    "El precio por día debe ser positivo".to_string(),
                ));
            }
        }

        let updated = self
            .repository
            .update(
                id,
                request.brand,
                request.model,
                request.price_per_day,
                request.status,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            updated.into(),
            "Vehículo actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(
        &self,
        requester: &AuthenticatedUser,
        id: Uuid,
    ) -> Result<(), AppError> {
        let vehicle = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        authorization::ensure_vehicle_owner(requester, vehicle.vendor_id)?;

        if self.bookings.vehicle_has_active(id).await? {
            return Err(AppError::Conflict(
                "No se puede eliminar un vehículo con reservas activas".to_string(),
            ));
        }

        self.repository.delete(id).await?;
        Ok(())
    }
}
