//! DTOs de reservas

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::booking::{Booking, BookingStatus};

/// Request para crear una reserva
///
/// Las fechas son fechas de calendario (sin hora); la validación del
/// rango la hace el comprobador de disponibilidad antes de tocar storage.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateBookingRequest {
    pub vehicle_id: Uuid,

    pub pickup_date: NaiveDate,

    pub return_date: NaiveDate,

    #[validate(length(min = 2, max = 200))]
    pub pickup_location: String,

    #[validate(length(min = 2, max = 200))]
    pub return_location: String,
}

/// Response de reserva para la API
#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub vehicle_id: Uuid,
    pub pickup_date: NaiveDate,
    pub return_date: NaiveDate,
    pub pickup_location: String,
    pub return_location: String,
    pub total_amount: Decimal,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

impl From<Booking> for BookingResponse {
    fn from(booking: Booking) -> Self {
        Self {
            id: booking.id,
            customer_id: booking.customer_id,
            vehicle_id: booking.vehicle_id,
            pickup_date: booking.pickup_date,
            return_date: booking.return_date,
            pickup_location: booking.pickup_location,
            return_location: booking.return_location,
            total_amount: booking.total_amount,
            status: booking.status,
            created_at: booking.created_at,
        }
    }
}
