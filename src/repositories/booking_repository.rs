//! Repositorio de reservas
//!
//! Las operaciones del flujo check-then-insert reciben la transacción
//! abierta por el controller; la frontera transaccional es siempre del
//! caller. Las reservas nunca se borran, solo cambian de estado.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::models::booking::{Booking, BookingStatus};
use crate::utils::errors::AppResult;

pub struct BookingRepository {
    pool: PgPool,
}

impl BookingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Reservas que bloquean disponibilidad (Pending/Confirmed) para un
    /// vehículo, leídas dentro de la transacción del caller
    pub async fn list_active_for_vehicle(
        tx: &mut Transaction<'_, Postgres>,
        vehicle_id: Uuid,
    ) -> AppResult<Vec<Booking>> {
        let bookings = sqlx::query_as::<_, Booking>(
            r#"
            SELECT * FROM bookings
            WHERE vehicle_id = $1 AND status IN ('pending', 'confirmed')
            ORDER BY pickup_date
            "#,
        )
        .bind(vehicle_id)
        .fetch_all(&mut **tx)
        .await?;

        Ok(bookings)
    }

    /// Insertar una reserva nueva (estado inicial Pending) dentro de la
    /// transacción del caller
    pub async fn insert(
        tx: &mut Transaction<'_, Postgres>,
        customer_id: Uuid,
        vehicle_id: Uuid,
        pickup_date: NaiveDate,
        return_date: NaiveDate,
        pickup_location: String,
        return_location: String,
        total_amount: Decimal,
    ) -> AppResult<Booking> {
        let booking = sqlx::query_as::<_, Booking>(
            r#"
            INSERT INTO bookings
                (id, customer_id, vehicle_id, pickup_date, return_date,
                 pickup_location, return_location, total_amount, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, 'pending', $9)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(customer_id)
        .bind(vehicle_id)
        .bind(pickup_date)
        .bind(return_date)
        .bind(pickup_location)
        .bind(return_location)
        .bind(total_amount)
        .bind(Utc::now())
        .fetch_one(&mut **tx)
        .await?;

        Ok(booking)
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Booking>> {
        let booking = sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(booking)
    }

    /// Cargar y bloquear una reserva para una transición de estado
    pub async fn lock_by_id(
        tx: &mut Transaction<'_, Postgres>,
        id: Uuid,
    ) -> AppResult<Option<Booking>> {
        let booking =
            sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut **tx)
                .await?;

        Ok(booking)
    }

    pub async fn list_by_customer(&self, customer_id: Uuid) -> AppResult<Vec<Booking>> {
        let bookings = sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE customer_id = $1 ORDER BY created_at DESC",
        )
        .bind(customer_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(bookings)
    }

    pub async fn list_all(&self) -> AppResult<Vec<Booking>> {
        let bookings =
            sqlx::query_as::<_, Booking>("SELECT * FROM bookings ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;

        Ok(bookings)
    }

    /// Transicionar el estado de una reserva dentro de la transacción del
    /// caller. La validación de la transición ya ocurrió contra la fila
    /// bloqueada.
    pub async fn update_status(
        tx: &mut Transaction<'_, Postgres>,
        id: Uuid,
        status: BookingStatus,
    ) -> AppResult<Booking> {
        let booking = sqlx::query_as::<_, Booking>(
            "UPDATE bookings SET status = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_one(&mut **tx)
        .await?;

        Ok(booking)
    }

    /// ¿Tiene el vehículo alguna reserva activa? (bloquea el borrado del
    /// vehículo)
    pub async fn vehicle_has_active(&self, vehicle_id: Uuid) -> AppResult<bool> {
        let result: (bool,) = sqlx::query_as(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM bookings
                WHERE vehicle_id = $1 AND status IN ('pending', 'confirmed')
            )
            "#,
        )
        .bind(vehicle_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    /// ¿Completó el cliente alguna reserva sobre este vehículo? (requisito
    /// para dejar una review)
    pub async fn customer_completed_on_vehicle(
        &self,
        customer_id: Uuid,
        vehicle_id: Uuid,
    ) -> AppResult<bool> {
        let result: (bool,) = sqlx::query_as(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM bookings
                WHERE customer_id = $1 AND vehicle_id = $2 AND status = 'completed'
            )
            "#,
        )
        .bind(customer_id)
        .bind(vehicle_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }
}
