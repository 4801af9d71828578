//! Controller de pagos
//!
//! Un pago es uno-a-uno con su reserva. El alta de un pago exitoso y la
//! confirmación de la reserva ocurren en la misma transacción.

use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::controllers::booking_controller::BookingController;
use crate::dto::common::ApiResponse;
use crate::dto::payment_dto::{CreatePaymentRequest, PaymentResponse, UpdatePaymentStatusRequest};
use crate::middleware::auth::AuthenticatedUser;
use crate::models::payment::PaymentStatus;
use crate::repositories::booking_repository::BookingRepository;
use crate::repositories::payment_repository::PaymentRepository;
use crate::services::audit_trail::AuditTrail;
use crate::utils::authorization;
use crate::utils::errors::AppError;

pub struct PaymentController {
    pool: PgPool,
    repository: PaymentRepository,
    audit: AuditTrail,
}

impl PaymentController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PaymentRepository::new(pool.clone()),
            audit: AuditTrail::new(pool.clone()),
            pool,
        }
    }

    /// Pagar una reserva: inserta el pago como Paid y confirma la reserva
    /// (Pending -> Confirmed) atómicamente
    pub async fn create(
        &self,
        requester: &AuthenticatedUser,
        request: CreatePaymentRequest,
    ) -> Result<ApiResponse<PaymentResponse>, AppError> {
        request.validate()?;

        if self.repository.exists_for_booking(request.booking_id).await? {
            return Err(AppError::Conflict(
                "La reserva ya tiene un pago registrado".to_string(),
            ));
        }

        let mut tx = self.pool.begin().await?;

        let booking = BookingRepository::lock_by_id(&mut tx, request.booking_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reserva no encontrada".to_string()))?;

        authorization::ensure_booking_access(requester, booking.customer_id)?;

        // Valida Pending -> Confirmed; rechaza pagar reservas canceladas,
        // completadas o ya confirmadas
        BookingController::confirm_in_tx(&mut tx, &booking).await?;

        let payment = PaymentRepository::insert(
            &mut tx,
            booking.id,
            booking.total_amount,
            request.method,
            PaymentStatus::Paid,
        )
        .await?;

        tx.commit().await?;

        log::info!("Pago {} registrado, reserva {} confirmada", payment.id, booking.id);

        self.audit
            .record(
                requester.user_id,
                "booking.confirmed",
                "booking",
                booking.id,
                Some(json!({ "payment_id": payment.id })),
            )
            .await;

        Ok(ApiResponse::success_with_message(
            payment.into(),
            "Pago registrado y reserva confirmada".to_string(),
        ))
    }

    pub async fn get_by_booking(
        &self,
        requester: &AuthenticatedUser,
        booking_id: Uuid,
    ) -> Result<PaymentResponse, AppError> {
        let bookings = BookingRepository::new(self.pool.clone());
        let booking = bookings
            .find_by_id(booking_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reserva no encontrada".to_string()))?;

        authorization::ensure_booking_access(requester, booking.customer_id)?;

        let payment = self
            .repository
            .find_by_booking(booking_id)
            .await?
            .ok_or_else(|| AppError::NotFound("La reserva no tiene pago".to_string()))?;

        Ok(payment.into())
    }

    /// Actualización administrativa del estado de un pago (p. ej. marcar
    /// un reembolso). No toca el estado de la reserva.
    pub async fn update_status(
        &self,
        requester: &AuthenticatedUser,
        id: Uuid,
        request: UpdatePaymentStatusRequest,
    ) -> Result<ApiResponse<PaymentResponse>, AppError> {
        authorization::ensure_admin(requester)?;

        let payment = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Pago no encontrado".to_string()))?;

        let updated = self.repository.update_status(payment.id, request.status).await?;

        self.audit
            .record(
                requester.user_id,
                "payment.status_updated",
                "payment",
                updated.id,
                Some(json!({ "status": updated.status })),
            )
            .await;

        Ok(ApiResponse::success_with_message(
            updated.into(),
            "Estado del pago actualizado".to_string(),
        ))
    }
}
