//! Controller de reviews
//!
//! Solo puede opinar quien completó una reserva sobre el vehículo.

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::common::ApiResponse;
use crate::dto::review_dto::{CreateReviewRequest, ReviewResponse};
use crate::middleware::auth::AuthenticatedUser;
use crate::repositories::booking_repository::BookingRepository;
use crate::repositories::review_repository::ReviewRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::authorization;
use crate::utils::errors::AppError;

pub struct ReviewController {
    repository: ReviewRepository,
    bookings: BookingRepository,
    vehicles: VehicleRepository,
}

impl ReviewController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ReviewRepository::new(pool.clone()),
            bookings: BookingRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        requester: &AuthenticatedUser,
        request: CreateReviewRequest,
    ) -> Result<ApiResponse<ReviewResponse>, AppError> {
        authorization::ensure_can_book(requester)?;
        request.validate()?;

        if self.vehicles.find_by_id(request.vehicle_id).await?.is_none() {
            return Err(AppError::NotFound("Vehículo no encontrado".to_string()));
        }

        let completed = self
            .bookings
            .customer_completed_on_vehicle(requester.user_id, request.vehicle_id)
            .await?;
        if !completed {
            return Err(AppError::Forbidden(
                "Solo puedes opinar sobre vehículos que hayas alquilado".to_string(),
            ));
        }

        let review = self
            .repository
            .create(
                requester.user_id,
                request.vehicle_id,
                request.rating,
                request.comment,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            review.into(),
            "Review publicada".to_string(),
        ))
    }

    pub async fn list_by_vehicle(
        &self,
        vehicle_id: Uuid,
    ) -> Result<Vec<ReviewResponse>, AppError> {
        let reviews = self.repository.list_by_vehicle(vehicle_id).await?;
        Ok(reviews.into_iter().map(ReviewResponse::from).collect())
    }
}
