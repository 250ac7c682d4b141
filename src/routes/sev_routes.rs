use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::SevController;
use crate::dto::{ApiResponse, CreateSevRequest, SevResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_sev_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_sevs).post(create_sev))
        .route("/:id/complete", post(complete_sev))
}

async fn create_sev(
    State(state): State<AppState>,
    Json(request): Json<CreateSevRequest>,
) -> Result<Json<ApiResponse<SevResponse>>, AppError> {
    let controller = SevController::new(&state);
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_sevs(State(state): State<AppState>) -> Json<Vec<SevResponse>> {
    let controller = SevController::new(&state);
    Json(controller.list().await)
}

async fn complete_sev(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Json<ApiResponse<SevResponse>> {
    let controller = SevController::new(&state);
    Json(controller.complete(id).await)
}
