//! DTOs de vehículos

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::vehicle::{Vehicle, VehicleStatus};

/// Request para crear un nuevo vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[validate(length(min = 2, max = 100))]
    pub brand: String,

    #[validate(length(min = 1, max = 100))]
    pub model: String,

    #[validate(length(min = 5, max = 20))]
    pub license_plate: String,

    pub price_per_day: Decimal,
}

/// Request para actualizar un vehículo existente
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateVehicleRequest {
    #[validate(length(min = 2, max = 100))]
    pub brand: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub model: Option<String>,

    pub price_per_day: Option<Decimal>,

    pub status: Option<VehicleStatus>,
}

/// Response de vehículo para la API
#[derive(Debug, Serialize)]
pub struct VehicleResponse {
    pub id: Uuid,
    pub vendor_id: Uuid,
    pub brand: String,
    pub model: String,
    pub license_plate: String,
    pub price_per_day: Decimal,
    pub status: VehicleStatus,
    pub created_at: DateTime<Utc>,
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            vendor_id: vehicle.vendor_id,
            brand: vehicle.brand,
            model: vehicle.model,
            license_plate: vehicle.license_plate,
            price_per_day: vehicle.price_per_day,
            status: vehicle.status,
            created_at: vehicle.created_at,
        }
    }
}
