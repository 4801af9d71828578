//! DTOs de eventos de auditoría

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::audit::AuditEvent;

/// Request de ingestión de un evento de auditoría externo
#[derive(Debug, Deserialize, Validate)]
pub struct IngestAuditEventRequest {
    #[validate(length(min = 1, max = 200))]
    pub actor: String,

    #[validate(length(min = 1, max = 100))]
    pub action: String,

    #[validate(length(min = 1, max = 100))]
    pub entity_type: String,

    pub entity_id: Option<Uuid>,

    pub detail: Option<serde_json::Value>,
}

/// Response de evento de auditoría
#[derive(Debug, Serialize)]
pub struct AuditEventResponse {
    pub id: Uuid,
    pub actor: String,
    pub action: String,
    pub entity_type: String,
    pub entity_id: Option<Uuid>,
    pub detail: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
}

impl From<AuditEvent> for AuditEventResponse {
    fn from(event: AuditEvent) -> Self {
        Self {
            id: event.id,
            actor: event.actor,
            action: event.action,
            entity_type: event.entity_type,
            entity_id: event.entity_id,
            detail: event.detail,
            created_at: event.created_at,
        }
    }
}
