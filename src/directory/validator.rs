use crate::errors::DirectoryError;
use crate::models::{NewReport, ReportPatch};

pub const DEFAULT_URL_DOMAIN: &str = "app.powerbi.com";

/// Field rules applied before any write.
#[derive(Debug, Clone)]
pub struct ReportValidator {
    required_url_domain: String,
}

impl Default for ReportValidator {
    fn default() -> Self {
        Self::new(DEFAULT_URL_DOMAIN)
    }
}

impl ReportValidator {
    pub fn new(required_url_domain: impl Into<String>) -> Self {
        Self { required_url_domain: required_url_domain.into() }
    }

    pub fn validate_new(&self, name: &str, group: &str, url: &str) -> Result<NewReport, DirectoryError> {
        Ok(NewReport {
            name: normalize_name(name)?,
            group: normalize_group(group)?,
            url: self.normalize_url(url)?,
        })
    }

    /// Validate only the supplied fields of a partial update.
    pub fn validate_patch(
        &self,
        name: Option<&str>,
        group: Option<&str>,
        url: Option<&str>,
    ) -> Result<ReportPatch, DirectoryError> {
        Ok(ReportPatch {
            name: name.map(normalize_name).transpose()?,
            group: group.map(normalize_group).transpose()?,
            url: url.map(|u| self.normalize_url(u)).transpose()?,
        })
    }

    fn normalize_url(&self, url: &str) -> Result<String, DirectoryError> {
        let trimmed = url.trim();
        if trimmed.is_empty() {
            return Err(DirectoryError::validation("url", "URL cannot be empty"));
        }
        if !trimmed.contains(self.required_url_domain.as_str()) {
            return Err(DirectoryError::validation(
                "url",
                format!("URL must point to {}", self.required_url_domain),
            ));
        }
        Ok(trimmed.to_string())
    }
}

fn normalize_name(name: &str) -> Result<String, DirectoryError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(DirectoryError::validation("name", "Report name cannot be empty"));
    }
    Ok(trimmed.to_string())
}

/// Trim and upper-case a group label.
pub fn normalize_group(group: &str) -> Result<String, DirectoryError> {
    let trimmed = group.trim();
    if trimmed.is_empty() {
        return Err(DirectoryError::validation("group", "Group cannot be empty"));
    }
    Ok(trimmed.to_uppercase())
}
