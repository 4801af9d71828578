//! Controller de auditoría
//!
//! Ingesta de eventos externos (POST) y consulta de los más recientes.
//! Solo accesible para admins.

use sqlx::PgPool;
use validator::Validate;

use crate::dto::audit_dto::{AuditEventResponse, IngestAuditEventRequest};
use crate::dto::common::ApiResponse;
use crate::middleware::auth::AuthenticatedUser;
use crate::repositories::audit_repository::AuditRepository;
use crate::utils::authorization;
use crate::utils::errors::AppError;

const RECENT_EVENTS_LIMIT: i64 = 100;

pub struct AuditController {
    repository: AuditRepository,
}

impl AuditController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: AuditRepository::new(pool),
        }
    }

    pub async fn ingest(
        &self,
        requester: &AuthenticatedUser,
        request: IngestAuditEventRequest,
    ) -> Result<ApiResponse<AuditEventResponse>, AppError> {
        authorization::ensure_admin(requester)?;
        request.validate()?;

        let event = self
            .repository
            .insert(
                &request.actor,
                &request.action,
                &request.entity_type,
                request.entity_id,
                request.detail,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            event.into(),
            "Evento registrado".to_string(),
        ))
    }

    pub async fn list_recent(
        &self,
        requester: &AuthenticatedUser,
    ) -> Result<Vec<AuditEventResponse>, AppError> {
        authorization::ensure_admin(requester)?;

        let events = self.repository.list_recent(RECENT_EVENTS_LIMIT).await?;
        Ok(events.into_iter().map(AuditEventResponse::from).collect())
    }
}
