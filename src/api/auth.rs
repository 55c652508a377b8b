use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use crate::api::AppState;
use crate::errors::DirectoryError;

pub async fn admin_auth_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, DirectoryError> {
    if let Some(expected_token) = state.admin_token.as_deref() {
        let auth_header = request.headers()
            .get("Authorization")
            .and_then(|v| v.to_str().ok());

        match auth_header.and_then(|h| h.strip_prefix("Bearer ")) {
            Some(token) if token == expected_token => {}
            Some(_) => return Err(DirectoryError::Unauthorized("Invalid admin token".into())),
            None => return Err(DirectoryError::Unauthorized("Missing Authorization header".into())),
        }
    }

    Ok(next.run(request).await)
}
