use axum::{
    extract::{Path, State},
    routing::{get, post},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::review_controller::ReviewController;
use crate::dto::common::ApiResponse;
use crate::dto::review_dto::{CreateReviewRequest, ReviewResponse};
use crate::middleware::auth::AuthenticatedUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_review_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_review))
        .route("/vehicle/:vehicle_id", get(list_reviews_by_vehicle))
}

async fn create_review(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<CreateReviewRequest>,
) -> Result<Json<ApiResponse<ReviewResponse>>, AppError> {
    let controller = ReviewController::new(state.pool.clone());
    let response = controller.create(&user, request).await?;
    Ok(Json(response))
}

async fn list_reviews_by_vehicle(
    State(state): State<AppState>,
    Path(vehicle_id): Path<Uuid>,
) -> Result<Json<Vec<ReviewResponse>>, AppError> {
    let controller = ReviewController::new(state.pool.clone());
    let response = controller.list_by_vehicle(vehicle_id).await?;
    Ok(Json(response))
}
