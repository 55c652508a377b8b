use std::path::Path;
use crate::errors::DirectoryError;
use super::types::ReportDirConfig;
use super::schema::CONFIG_SCHEMA;
use tracing::warn;

pub async fn parse_config(path: &Path) -> Result<ReportDirConfig, DirectoryError> {
    if !path.exists() {
        return Err(DirectoryError::Config(format!("Config file not found: {}", path.display())));
    }

    let metadata = tokio::fs::metadata(path).await?;
    if metadata.len() > 1_048_576 {
        return Err(DirectoryError::Config("Config file exceeds 1MB limit".into()));
    }

    let content = tokio::fs::read_to_string(path).await?;
    parse_config_str(&content)
}

pub fn parse_config_str(content: &str) -> Result<ReportDirConfig, DirectoryError> {
    let yaml: serde_yaml::Value = serde_yaml::from_str(content)?;

    // An empty file parses as null
    if yaml.is_null() {
        return Ok(ReportDirConfig::default());
    }

    validate_schema(&yaml)?;

    let config: ReportDirConfig = serde_yaml::from_value(yaml)?;

    validate_semantics(&config)?;

    Ok(config)
}

/// Validate config against the JSON schema for structural correctness.
fn validate_schema(yaml: &serde_yaml::Value) -> Result<(), DirectoryError> {
    let json_value = serde_json::to_value(yaml)
        .map_err(|e| DirectoryError::Config(format!("Config conversion error: {}", e)))?;

    let compiled = jsonschema::JSONSchema::compile(&CONFIG_SCHEMA)
        .map_err(|e| DirectoryError::Config(format!("Schema compilation error: {}", e)))?;

    let result = compiled.validate(&json_value);
    if let Err(errors) = result {
        // Advisory: typed parsing below is the hard check
        for e in errors {
            let msg = format!("{} at {}", e, e.instance_path);
            warn!(validation_error = %msg, "Config schema warning");
        }
    }

    Ok(())
}

fn validate_semantics(config: &ReportDirConfig) -> Result<(), DirectoryError> {
    if let Some(domain) = config.required_url_domain() {
        if domain.trim().is_empty() {
            return Err(DirectoryError::Config("directory.required_url_domain cannot be empty".into()));
        }
        if domain.chars().any(char::is_whitespace) {
            return Err(DirectoryError::Config(format!(
                "directory.required_url_domain must not contain whitespace: '{}'",
                domain
            )));
        }
    }

    if config.port() == Some(0) {
        return Err(DirectoryError::Config("server.port must be non-zero".into()));
    }

    if let Some(token) = config.admin_token() {
        if token.trim().is_empty() {
            warn!("admin.token is set but empty; admin endpoints stay open");
        }
    }

    Ok(())
}
