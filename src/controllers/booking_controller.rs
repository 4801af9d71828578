//! Controller de reservas
//!
//! Orquesta el ciclo de vida completo: creación con comprobación de
//! disponibilidad, cancelación, confirmación por pago y cierre
//! administrativo. El flujo check-then-insert corre entero dentro de una
//! transacción con la fila del vehículo bloqueada, de forma que dos
//! requests concurrentes sobre el mismo vehículo no pueden pasar ambas
//! la comprobación de conflicto.

use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::booking_dto::{BookingResponse, CreateBookingRequest};
use crate::dto::common::ApiResponse;
use crate::middleware::auth::AuthenticatedUser;
use crate::models::booking::{Booking, BookingStatus};
use crate::repositories::booking_repository::BookingRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::audit_trail::AuditTrail;
use crate::services::availability;
use crate::utils::authorization;
use crate::utils::errors::AppError;

pub struct BookingController {
    pool: PgPool,
    repository: BookingRepository,
    audit: AuditTrail,
}

impl BookingController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: BookingRepository::new(pool.clone()),
            audit: AuditTrail::new(pool.clone()),
            pool,
        }
    }

    /// Crear una reserva
    ///
    /// Valida el rango de fechas, bloquea el vehículo, comprueba
    /// solapamientos contra las reservas activas y persiste en estado
    /// Pending con el importe derivado de price_per_day.
    pub async fn create(
        &self,
        requester: &AuthenticatedUser,
        request: CreateBookingRequest,
    ) -> Result<ApiResponse<BookingResponse>, AppError> {
        authorization::ensure_can_book(requester)?;
        request.validate()?;

        // Validación de fechas antes de tocar storage
        let today = chrono::Utc::now().date_naive();
        availability::validate_date_range(today, request.pickup_date, request.return_date)?;

        let mut tx = self.pool.begin().await?;

        // El lock serializa las creaciones concurrentes por vehículo
        let vehicle = VehicleRepository::lock_by_id(&mut tx, request.vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        let active = BookingRepository::list_active_for_vehicle(&mut tx, vehicle.id).await?;
        if let Some(existing) =
            availability::find_conflict(&active, request.pickup_date, request.return_date)
        {
            return Err(AppError::Conflict(format!(
                "El vehículo ya está reservado del {} al {}",
                existing.pickup_date, existing.return_date
            )));
        }

        let total_amount = availability::quote_total(
            vehicle.price_per_day,
            request.pickup_date,
            request.return_date,
        );

        let booking = BookingRepository::insert(
            &mut tx,
            requester.user_id,
            vehicle.id,
            request.pickup_date,
            request.return_date,
            request.pickup_location,
            request.return_location,
            total_amount,
        )
        .await?;

        tx.commit().await?;

        log::info!(
            "Reserva {} creada para vehículo {} ({} - {})",
            booking.id,
            vehicle.id,
            booking.pickup_date,
            booking.return_date
        );

        self.audit
            .record(
                requester.user_id,
                "booking.created",
                "booking",
                booking.id,
                Some(json!({
                    "vehicle_id": vehicle.id,
                    "pickup_date": booking.pickup_date,
                    "return_date": booking.return_date,
                })),
            )
            .await;

        Ok(ApiResponse::success_with_message(
            booking.into(),
            "Reserva creada exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(
        &self,
        requester: &AuthenticatedUser,
        id: Uuid,
    ) -> Result<BookingResponse, AppError> {
        let booking = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reserva no encontrada".to_string()))?;

        authorization::ensure_booking_access(requester, booking.customer_id)?;

        Ok(booking.into())
    }

    /// Listar reservas: las propias para clientes, todas para admins
    pub async fn list(
        &self,
        requester: &AuthenticatedUser,
    ) -> Result<Vec<BookingResponse>, AppError> {
        let bookings = if requester.role.can_administer() {
            self.repository.list_all().await?
        } else {
            self.repository.list_by_customer(requester.user_id).await?
        };

        Ok(bookings.into_iter().map(BookingResponse::from).collect())
    }

    /// Cancelar una reserva
    ///
    /// Permitida solo al cliente propietario o a un admin, y solo desde
    /// Pending/Confirmed. Cancelled es terminal.
    pub async fn cancel(
        &self,
        requester: &AuthenticatedUser,
        id: Uuid,
    ) -> Result<ApiResponse<BookingResponse>, AppError> {
        let booking = self
            .transition(id, BookingStatus::Cancelled, |booking| {
                authorization::ensure_booking_access(requester, booking.customer_id)
            })
            .await?;

        self.audit
            .record(requester.user_id, "booking.cancelled", "booking", id, None)
            .await;

        Ok(ApiResponse::success_with_message(
            booking.into(),
            "Reserva cancelada exitosamente".to_string(),
        ))
    }

    /// Cerrar una reserva (admin), solo desde Confirmed y con la fecha de
    /// devolución ya pasada
    pub async fn complete(
        &self,
        requester: &AuthenticatedUser,
        id: Uuid,
    ) -> Result<ApiResponse<BookingResponse>, AppError> {
        authorization::ensure_admin(requester)?;

        let today = chrono::Utc::now().date_naive();
        let booking = self
            .transition(id, BookingStatus::Completed, |booking| {
                if booking.return_date > today {
                    return Err(AppError::InvalidState(
                        "La reserva no puede cerrarse antes de la fecha de devolución".to_string(),
                    ));
                }
                Ok(())
            })
            .await?;

        self.audit
            .record(requester.user_id, "booking.completed", "booking", id, None)
            .await;

        Ok(ApiResponse::success_with_message(
            booking.into(),
            "Reserva completada".to_string(),
        ))
    }

    /// Confirmar una reserva tras un pago exitoso. La llama el controller
    /// de pagos dentro de su propia transacción.
    pub async fn confirm_in_tx(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        booking: &Booking,
    ) -> Result<Booking, AppError> {
        if !booking.status.can_transition_to(BookingStatus::Confirmed) {
            return Err(AppError::InvalidState(format!(
                "La reserva no puede confirmarse desde el estado '{}'",
                booking.status.as_str()
            )));
        }

        BookingRepository::update_status(tx, booking.id, BookingStatus::Confirmed).await
    }

    /// Transición genérica de estado: carga la reserva con lock, aplica el
    /// gate del caller, valida la transición y persiste.
    async fn transition<F>(
        &self,
        id: Uuid,
        next: BookingStatus,
        gate: F,
    ) -> Result<Booking, AppError>
    where
        F: FnOnce(&Booking) -> Result<(), AppError>,
    {
        let mut tx = self.pool.begin().await?;

        let booking = BookingRepository::lock_by_id(&mut tx, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reserva no encontrada".to_string()))?;

        gate(&booking)?;

        if !booking.status.can_transition_to(next) {
            return Err(AppError::InvalidState(format!(
                "Transición no permitida: '{}' -> '{}'",
                booking.status.as_str(),
                next.as_str()
            )));
        }

        let updated = BookingRepository::update_status(&mut tx, id, next).await?;
        tx.commit().await?;

        log::info!("Reserva {} transicionada a '{}'", id, next.as_str());

        Ok(updated)
    }
}
