//! Controller de quejas

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::common::ApiResponse;
use crate::dto::complaint_dto::{
    ComplaintResponse, CreateComplaintRequest, UpdateComplaintStatusRequest,
};
use crate::middleware::auth::AuthenticatedUser;
use crate::models::complaint::COMPLAINT_STATUSES;
use crate::repositories::booking_repository::BookingRepository;
use crate::repositories::complaint_repository::ComplaintRepository;
use crate::utils::authorization;
use crate::utils::errors::AppError;

pub struct ComplaintController {
    repository: ComplaintRepository,
    bookings: BookingRepository,
}

impl ComplaintController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ComplaintRepository::new(pool.clone()),
            bookings: BookingRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        requester: &AuthenticatedUser,
        request: CreateComplaintRequest,
    ) -> Result<ApiResponse<ComplaintResponse>, AppError> {
        request.validate()?;

        let booking = self
            .bookings
            .find_by_id(request.booking_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reserva no encontrada".to_string()))?;

        // Solo el cliente de la reserva puede quejarse de ella
        authorization::ensure_booking_access(requester, booking.customer_id)?;

        let complaint = self
            .repository
            .create(
                requester.user_id,
                booking.id,
                request.subject,
                request.description,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            complaint.into(),
            "Queja registrada".to_string(),
        ))
    }

    pub async fn list(
        &self,
        requester: &AuthenticatedUser,
    ) -> Result<Vec<ComplaintResponse>, AppError> {
        let complaints = if requester.role.can_administer() {
            self.repository.list_all().await?
        } else {
            self.repository.list_by_customer(requester.user_id).await?
        };

        Ok(complaints.into_iter().map(ComplaintResponse::from).collect())
    }

    pub async fn update_status(
        &self,
        requester: &AuthenticatedUser,
        id: Uuid,
        request: UpdateComplaintStatusRequest,
    ) -> Result<ApiResponse<ComplaintResponse>, AppError> {
        authorization::ensure_admin(requester)?;

        if !COMPLAINT_STATUSES.contains(&request.status.as_str()) {
            return Err(AppError::InvalidArgument(format!(
                "Estado de queja inválido: '{}'",
                request.status
            )));
        }

        if self.repository.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("Queja no encontrada".to_string()));
        }

        let updated = self.repository.update_status(id, &request.status).await?;

        Ok(ApiResponse::success_with_message(
            updated.into(),
            "Estado de la queja actualizado".to_string(),
        ))
    }
}
