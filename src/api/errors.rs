use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use tracing::error;
use crate::errors::DirectoryError;

impl From<JsonRejection> for DirectoryError {
    fn from(rejection: JsonRejection) -> Self {
        DirectoryError::validation("body", rejection.body_text())
    }
}

impl From<QueryRejection> for DirectoryError {
    fn from(rejection: QueryRejection) -> Self {
        DirectoryError::validation("query", rejection.body_text())
    }
}

impl IntoResponse for DirectoryError {
    fn into_response(self) -> axum::response::Response {
        let classification = self.classify();
        let status = match &self {
            DirectoryError::Validation { .. } => StatusCode::BAD_REQUEST,
            DirectoryError::Duplicate(_) => StatusCode::BAD_REQUEST,
            DirectoryError::GroupInUse { .. } => StatusCode::BAD_REQUEST,
            DirectoryError::NotFound(_) => StatusCode::NOT_FOUND,
            DirectoryError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if !classification.client_error {
            error!(error = %self, error_type = classification.error_type, "Request failed");
        }

        let message = match &self {
            DirectoryError::Internal(_) => "Internal server error".to_string(),
            _ => self.to_string(),
        };

        let mut body = json!({
            "success": false,
            "error": message,
            "error_type": classification.error_type,
        });
        if let DirectoryError::Validation { field, .. } = &self {
            body["field"] = json!(field);
        }

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use serde_json::Value;

    async fn render(err: DirectoryError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_database_error_passes_message_through() {
        let (status, body) = render(DirectoryError::Database("disk full".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Database error: disk full");
        assert_eq!(body["error_type"], "DatabaseError");
        assert!(body.get("field").is_none());
    }

    #[tokio::test]
    async fn test_internal_error_hides_detail() {
        let (status, body) = render(DirectoryError::Internal("secret".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Internal server error");
        assert_eq!(body["error_type"], "InternalError");
        assert!(!body.to_string().contains("secret"));
    }

    #[tokio::test]
    async fn test_validation_error_carries_field() {
        let (status, body) = render(DirectoryError::validation("url", "URL cannot be empty")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["field"], "url");
        assert_eq!(body["error"], "URL cannot be empty");
    }
}
