use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct ReportQuery {
    pub group: Option<String>,
    pub search: Option<String>,
}

/// Missing fields deserialize as empty strings so they fail validation with
/// a field-specific message instead of a body rejection.
#[derive(Deserialize)]
pub struct CreateReportRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub group: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Deserialize, Default)]
pub struct UpdateReportRequest {
    pub name: Option<String>,
    pub group: Option<String>,
    pub url: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateGroupRequest {
    #[serde(default)]
    pub name: String,
}

#[derive(Serialize)]
pub struct GroupName {
    pub name: String,
}

/// Success envelope shared by every endpoint.
#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
}

impl<T> ApiResponse<T> {
    pub fn data(data: T) -> Self {
        Self { success: true, message: None, data: Some(data), total: None }
    }

    pub fn with_total(mut self, total: usize) -> Self {
        self.total = Some(total);
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl ApiResponse<()> {
    pub fn message(message: impl Into<String>) -> Self {
        Self { success: true, message: Some(message.into()), data: None, total: None }
    }
}
