use axum::{extract::State, Json};
use crate::api::models::ApiResponse;
use crate::api::AppState;
use crate::errors::DirectoryError;
use crate::models::Stats;

pub async fn get_stats(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Stats>>, DirectoryError> {
    Ok(Json(ApiResponse::data(state.service.stats()?)))
}
