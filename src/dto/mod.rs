pub mod audit_dto;
pub mod auth_dto;
pub mod booking_dto;
pub mod common;
pub mod complaint_dto;
pub mod payment_dto;
pub mod review_dto;
pub mod vehicle_dto;
