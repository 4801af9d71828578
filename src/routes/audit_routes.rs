use axum::{
    extract::State,
    routing::{get, post},
    Extension, Json, Router,
};

use crate::controllers::audit_controller::AuditController;
use crate::dto::audit_dto::{AuditEventResponse, IngestAuditEventRequest};
use crate::dto::common::ApiResponse;
use crate::middleware::auth::AuthenticatedUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_audit_router() -> Router<AppState> {
    Router::new()
        .route("/event", post(ingest_event))
        .route("/events", get(list_events))
}

async fn ingest_event(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<IngestAuditEventRequest>,
) -> Result<Json<ApiResponse<AuditEventResponse>>, AppError> {
    let controller = AuditController::new(state.pool.clone());
    let response = controller.ingest(&user, request).await?;
    Ok(Json(response))
}

async fn list_events(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Json<Vec<AuditEventResponse>>, AppError> {
    let controller = AuditController::new(state.pool.clone());
    let response = controller.list_recent(&user).await?;
    Ok(Json(response))
}
