//! Repositorio de quejas

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::complaint::Complaint;
use crate::utils::errors::AppResult;

pub struct ComplaintRepository {
    pool: PgPool,
}

impl ComplaintRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        customer_id: Uuid,
        booking_id: Uuid,
        subject: String,
        description: String,
    ) -> AppResult<Complaint> {
        let complaint = sqlx::query_as::<_, Complaint>(
            r#"
            INSERT INTO complaints (id, customer_id, booking_id, subject, description, status, created_at)
            VALUES ($1, $2, $3, $4, $5, 'open', $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(customer_id)
        .bind(booking_id)
        .bind(subject)
        .bind(description)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(complaint)
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Complaint>> {
        let complaint = sqlx::query_as::<_, Complaint>("SELECT * FROM complaints WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(complaint)
    }

    pub async fn list_by_customer(&self, customer_id: Uuid) -> AppResult<Vec<Complaint>> {
        let complaints = sqlx::query_as::<_, Complaint>(
            "SELECT * FROM complaints WHERE customer_id = $1 ORDER BY created_at DESC",
        )
        .bind(customer_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(complaints)
    }

    pub async fn list_all(&self) -> AppResult<Vec<Complaint>> {
        let complaints =
            sqlx::query_as::<_, Complaint>("SELECT * FROM complaints ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;

        Ok(complaints)
    }

    pub async fn update_status(&self, id: Uuid, status: &str) -> AppResult<Complaint> {
        let complaint = sqlx::query_as::<_, Complaint>(
            "UPDATE complaints SET status = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_one(&self.pool)
        .await?;

        Ok(complaint)
    }
}
