use axum::{extract::State, Json};
use crate::api::models::ApiResponse;
use crate::api::AppState;
use crate::errors::DirectoryError;

pub async fn list_groups(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<String>>>, DirectoryError> {
    Ok(Json(ApiResponse::data(state.service.list_groups()?)))
}
