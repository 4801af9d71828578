//! DTOs de reviews

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::review::Review;

/// Request para dejar una review
#[derive(Debug, Deserialize, Validate)]
pub struct CreateReviewRequest {
    pub vehicle_id: Uuid,

    #[validate(range(min = 1, max = 5))]
    pub rating: i32,

    #[validate(length(max = 1000))]
    pub comment: Option<String>,
}

/// Response de review para la API
#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub vehicle_id: Uuid,
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Review> for ReviewResponse {
    fn from(review: Review) -> Self {
        Self {
            id: review.id,
            customer_id: review.customer_id,
            vehicle_id: review.vehicle_id,
            rating: review.rating,
            comment: review.comment,
            created_at: review.created_at,
        }
    }
}
