use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use crate::api::models::{ApiResponse, CreateGroupRequest, CreateReportRequest, GroupName, UpdateReportRequest};
use crate::api::AppState;
use crate::errors::DirectoryError;
use crate::models::Report;

pub async fn create_report(
    State(state): State<AppState>,
    payload: Result<Json<CreateReportRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<Report>>), DirectoryError> {
    let Json(req) = payload?;
    let report = state.service.create_report(&req.name, &req.group, &req.url)?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::data(report).with_message("Report created successfully")),
    ))
}

pub async fn update_report(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateReportRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<Report>>, DirectoryError> {
    let Json(req) = payload?;
    let report = state.service.update_report(
        &id,
        req.name.as_deref(),
        req.group.as_deref(),
        req.url.as_deref(),
    )?;
    Ok(Json(ApiResponse::data(report).with_message("Report updated successfully")))
}

pub async fn delete_report(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>, DirectoryError> {
    state.service.delete_report(&id)?;
    Ok(Json(ApiResponse::message("Report deleted successfully")))
}

pub async fn create_group(
    State(state): State<AppState>,
    payload: Result<Json<CreateGroupRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<GroupName>>, DirectoryError> {
    let Json(req) = payload?;
    let name = state.service.create_group(&req.name)?;
    let message = format!("Group '{}' ready to use", name);
    Ok(Json(ApiResponse::data(GroupName { name }).with_message(message)))
}

pub async fn delete_group(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<ApiResponse<()>>, DirectoryError> {
    let group = state.service.delete_group(&name)?;
    Ok(Json(ApiResponse::message(format!("Group '{}' deleted successfully", group))))
}
