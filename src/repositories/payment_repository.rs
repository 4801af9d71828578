//! Repositorio de pagos

use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::models::payment::{Payment, PaymentStatus};
use crate::utils::errors::AppResult;

pub struct PaymentRepository {
    pool: PgPool,
}

impl PaymentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insertar un pago dentro de la transacción del caller (misma
    /// transacción que confirma la reserva)
    pub async fn insert(
        tx: &mut Transaction<'_, Postgres>,
        booking_id: Uuid,
        amount: Decimal,
        method: String,
        status: PaymentStatus,
    ) -> AppResult<Payment> {
        let paid_at = match status {
            PaymentStatus::Paid => Some(Utc::now()),
            _ => None,
        };

        let payment = sqlx::query_as::<_, Payment>(
            r#"
            INSERT INTO payments (id, booking_id, amount, method, status, paid_at, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(booking_id)
        .bind(amount)
        .bind(method)
        .bind(status)
        .bind(paid_at)
        .bind(Utc::now())
        .fetch_one(&mut **tx)
        .await?;

        Ok(payment)
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Payment>> {
        let payment = sqlx::query_as::<_, Payment>("SELECT * FROM payments WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(payment)
    }

    pub async fn find_by_booking(&self, booking_id: Uuid) -> AppResult<Option<Payment>> {
        let payment =
            sqlx::query_as::<_, Payment>("SELECT * FROM payments WHERE booking_id = $1")
                .bind(booking_id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(payment)
    }

    pub async fn exists_for_booking(&self, booking_id: Uuid) -> AppResult<bool> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM payments WHERE booking_id = $1)")
                .bind(booking_id)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }

    pub async fn update_status(
        &self,
        id: Uuid,
        status: PaymentStatus,
    ) -> AppResult<Payment> {
        let payment = sqlx::query_as::<_, Payment>(
            "UPDATE payments SET status = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_one(&self.pool)
        .await?;

        Ok(payment)
    }
}
