//! Repositorio de eventos de auditoría
//!
//! Tabla append-only: los eventos nunca se actualizan ni se borran.

use chrono::Utc;
use serde_json::Value;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::audit::AuditEvent;
use crate::utils::errors::AppResult;

pub struct AuditRepository {
    pool: PgPool,
}

impl AuditRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn insert(
        &self,
        actor: &str,
        action: &str,
        entity_type: &str,
        entity_id: Option<Uuid>,
        detail: Option<Value>,
    ) -> AppResult<AuditEvent> {
        let event = sqlx::query_as::<_, AuditEvent>(
            r#"
            INSERT INTO audit_events (id, actor, action, entity_type, entity_id, detail, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(actor)
        .bind(action)
        .bind(entity_type)
        .bind(entity_id)
        .bind(detail)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(event)
    }

    pub async fn list_recent(&self, limit: i64) -> AppResult<Vec<AuditEvent>> {
        let events = sqlx::query_as::<_, AuditEvent>(
            "SELECT * FROM audit_events ORDER BY created_at DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(events)
    }
}
