use thiserror::Error;

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("{message}")]
    Validation { field: &'static str, message: String },

    #[error("{0} not found")]
    NotFound(String),

    #[error("{0}")]
    Duplicate(String),

    #[error("Cannot delete group '{group}' because it has {count} associated reports")]
    GroupInUse { group: String, count: usize },

    #[error("{0}")]
    Unauthorized(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DirectoryError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        DirectoryError::Validation { field, message: message.into() }
    }
}
