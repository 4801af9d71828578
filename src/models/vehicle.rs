//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle y su enum de estado.
//! Mapea exactamente al schema PostgreSQL con primary key 'id'.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;

/// Estado del vehículo - mapea al ENUM vehicle_status
///
/// Es puramente informativo: la respuesta autoritativa a "¿está libre
/// el vehículo en la fecha X?" sale siempre de escanear las reservas
/// activas, nunca de este campo.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "vehicle_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum VehicleStatus {
    Available,
    Rented,
    UnderMaintenance,
    Unavailable,
}

/// Vehicle - mapea exactamente a la tabla vehicles
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    pub id: Uuid,
    pub vendor_id: Uuid,
    pub brand: String,
    pub model: String,
    pub license_plate: String,
    pub price_per_day: Decimal,
    pub status: VehicleStatus,
    pub created_at: DateTime<Utc>,
}
