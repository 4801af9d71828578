pub mod audit_routes;
pub mod auth_routes;
pub mod booking_routes;
pub mod complaint_routes;
pub mod payment_routes;
pub mod review_routes;
pub mod vehicle_routes;
