use super::types::DirectoryError;

#[derive(Debug, Clone)]
pub struct ErrorClassification {
    pub error_type: &'static str,
    /// True when the caller sent something we refuse; false for failures on our side.
    pub client_error: bool,
}

impl DirectoryError {
    /// Classify this error into the taxonomy surfaced to API callers.
    pub fn classify(&self) -> ErrorClassification {
        match self {
            // Caller errors
            DirectoryError::Validation { .. } => ErrorClassification {
                error_type: "ValidationError",
                client_error: true,
            },
            DirectoryError::NotFound(_) => ErrorClassification {
                error_type: "NotFoundError",
                client_error: true,
            },
            DirectoryError::Duplicate(_) => ErrorClassification {
                error_type: "DuplicateError",
                client_error: true,
            },
            DirectoryError::GroupInUse { .. } => ErrorClassification {
                error_type: "GroupInUseError",
                client_error: true,
            },
            DirectoryError::Unauthorized(_) => ErrorClassification {
                error_type: "AuthenticationError",
                client_error: true,
            },

            // Server-side failures
            DirectoryError::Database(_) => ErrorClassification {
                error_type: "DatabaseError",
                client_error: false,
            },
            DirectoryError::Config(_) => ErrorClassification {
                error_type: "ConfigError",
                client_error: false,
            },
            DirectoryError::Network(_) => ErrorClassification {
                error_type: "NetworkError",
                client_error: false,
            },
            DirectoryError::Io(_) => ErrorClassification {
                error_type: "IoError",
                client_error: false,
            },
            DirectoryError::Json(_) => ErrorClassification {
                error_type: "JsonError",
                client_error: false,
            },
            DirectoryError::Yaml(_) => ErrorClassification {
                error_type: "YamlError",
                client_error: false,
            },
            DirectoryError::Internal(_) => ErrorClassification {
                error_type: "InternalError",
                client_error: false,
            },
        }
    }

    /// Process exit code for a CLI command that failed with this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            DirectoryError::Config(_) | DirectoryError::Yaml(_) => 2,
            DirectoryError::Validation { .. } | DirectoryError::Duplicate(_) => 3,
            DirectoryError::Network(_) => 4,
            _ => 1,
        }
    }
}
