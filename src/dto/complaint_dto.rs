//! DTOs de quejas

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::complaint::Complaint;

/// Request para abrir una queja sobre una reserva
#[derive(Debug, Deserialize, Validate)]
pub struct CreateComplaintRequest {
    pub booking_id: Uuid,

    #[validate(length(min = 2, max = 200))]
    pub subject: String,

    #[validate(length(min = 2, max = 2000))]
    pub description: String,
}

/// Request administrativo para cambiar el estado de una queja
#[derive(Debug, Deserialize)]
pub struct UpdateComplaintStatusRequest {
    pub status: String,
}

/// Response de queja para la API
#[derive(Debug, Serialize)]
pub struct ComplaintResponse {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub booking_id: Uuid,
    pub subject: String,
    pub description: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<Complaint> for ComplaintResponse {
    fn from(complaint: Complaint) -> Self {
        Self {
            id: complaint.id,
            customer_id: complaint.customer_id,
            booking_id: complaint.booking_id,
            subject: complaint.subject,
            description: complaint.description,
            status: complaint.status,
            created_at: complaint.created_at,
        }
    }
}
