use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use crate::api::models::{ApiResponse, ReportQuery};
use crate::api::AppState;
use crate::errors::DirectoryError;
use crate::models::Report;

pub async fn list_reports(
    State(state): State<AppState>,
    query: Result<Query<ReportQuery>, QueryRejection>,
) -> Result<Json<ApiResponse<Vec<Report>>>, DirectoryError> {
    let Query(query) = query?;
    let reports = state.service.list_reports(query.group.as_deref(), query.search.as_deref())?;
    let total = reports.len();
    Ok(Json(ApiResponse::data(reports).with_total(total)))
}

pub async fn get_report(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Report>>, DirectoryError> {
    let report = state.service.get_report(&id)?;
    Ok(Json(ApiResponse::data(report)))
}
