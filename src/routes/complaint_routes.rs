use axum::{
    extract::{Path, State},
    routing::{get, post, put},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::complaint_controller::ComplaintController;
use crate::dto::common::ApiResponse;
use crate::dto::complaint_dto::{
    ComplaintResponse, CreateComplaintRequest, UpdateComplaintStatusRequest,
};
use crate::middleware::auth::AuthenticatedUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_complaint_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_complaint))
        .route("/", get(list_complaints))
        .route("/:id/status", put(update_complaint_status))
}

async fn create_complaint(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<CreateComplaintRequest>,
) -> Result<Json<ApiResponse<ComplaintResponse>>, AppError> {
    let controller = ComplaintController::new(state.pool.clone());
    let response = controller.create(&user, request).await?;
    Ok(Json(response))
}

async fn list_complaints(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Json<Vec<ComplaintResponse>>, AppError> {
    let controller = ComplaintController::new(state.pool.clone());
    let response = controller.list(&user).await?;
    Ok(Json(response))
}

async fn update_complaint_status(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateComplaintStatusRequest>,
) -> Result<Json<ApiResponse<ComplaintResponse>>, AppError> {
    let controller = ComplaintController::new(state.pool.clone());
    let response = controller.update_status(&user, id, request).await?;
    Ok(Json(response))
}
