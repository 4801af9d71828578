//! Traza de auditoría interna
//!
//! Servicio fino que registra eventos de auditoría en cada transición de
//! reserva. Un fallo al escribir el evento nunca tumba la request: se
//! loguea y se sigue.

use serde_json::Value;
use sqlx::PgPool;
use uuid::Uuid;

use crate::repositories::audit_repository::AuditRepository;

pub struct AuditTrail {
    repository: AuditRepository,
}

impl AuditTrail {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: AuditRepository::new(pool),
        }
    }

    /// Registrar un evento de auditoría (best effort)
    pub async fn record(
        &self,
        actor: Uuid,
        action: &str,
        entity_type: &str,
        entity_id: Uuid,
        detail: Option<Value>,
    ) {
        let result = self
            .repository
            .insert(
                &actor.to_string(),
                action,
                entity_type,
                Some(entity_id),
                detail,
            )
            .await;

        if let Err(e) = result {
            log::warn!("No se pudo registrar evento de auditoría '{}': {}", action, e);
        }
    }
}
