//! DTOs de pagos

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::payment::{Payment, PaymentStatus};

/// Request para pagar una reserva
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePaymentRequest {
    pub booking_id: Uuid,

    #[validate(length(min = 2, max = 50))]
    pub method: String,
}

/// Request administrativo para cambiar el estado de un pago
#[derive(Debug, Deserialize)]
pub struct UpdatePaymentStatusRequest {
    pub status: PaymentStatus,
}

/// Response de pago para la API
#[derive(Debug, Serialize)]
pub struct PaymentResponse {
    pub id: Uuid,
    pub booking_id: Uuid,
    pub amount: Decimal,
    pub method: String,
    pub status: PaymentStatus,
    pub paid_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<Payment> for PaymentResponse {
    fn from(payment: Payment) -> Self {
        Self {
            id: payment.id,
            booking_id: payment.booking_id,
            amount: payment.amount,
            method: payment.method,
            status: payment.status,
            paid_at: payment.paid_at,
            created_at: payment.created_at,
        }
    }
}
