//! Modelo de AuditEvent
//!
//! Eventos de auditoría: se ingestan por POST desde otros servicios y se
//! escriben internamente en cada transición de reserva.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// AuditEvent - mapea exactamente a la tabla audit_events
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AuditEvent {
    pub id: Uuid,
    pub actor: String,
    pub action: String,
    pub entity_type: String,
    pub entity_id: Option<Uuid>,
    pub detail: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
}
