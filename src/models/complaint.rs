//! Modelo de Complaint
//!
//! El estado se guarda como texto plano ('open', 'in_progress',
//! 'resolved'); la validación de valores permitidos vive en el controller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Valores permitidos para el estado de una queja
pub const COMPLAINT_STATUSES: &[&str] = &["open", "in_progress", "resolved"];

/// Complaint - mapea exactamente a la tabla complaints
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Complaint {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub booking_id: Uuid,
    pub subject: String,
    pub description: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
