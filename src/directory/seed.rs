use std::path::Path;
use serde::Deserialize;
use tracing::{info, warn};
use crate::errors::DirectoryError;
use super::service::DirectoryService;

/// One catalogue entry in a seed file.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedEntry {
    pub name: String,
    pub group: String,
    pub url: String,
}

pub async fn load_seed_file(path: &Path) -> Result<Vec<SeedEntry>, DirectoryError> {
    if !path.exists() {
        return Err(DirectoryError::Config(format!("Seed file not found: {}", path.display())));
    }
    let content = tokio::fs::read_to_string(path).await?;
    let entries: Vec<SeedEntry> = serde_json::from_str(&content)?;
    Ok(entries)
}

/// Insert `entries` if the directory is empty. Entries that fail validation
/// or collide with an earlier entry are skipped. Returns the number inserted.
pub fn seed_if_empty(service: &DirectoryService, entries: &[SeedEntry]) -> Result<usize, DirectoryError> {
    if service.db().count_reports()? > 0 {
        info!("Directory already contains reports, skipping seed");
        return Ok(0);
    }

    let mut inserted = 0;
    for entry in entries {
        match service.create_report(&entry.name, &entry.group, &entry.url) {
            Ok(_) => inserted += 1,
            Err(e) if e.classify().client_error => {
                warn!(name = %entry.name, group = %entry.group, error = %e, "Skipping seed entry");
            }
            Err(e) => return Err(e),
        }
    }

    info!(inserted, total = entries.len(), "Seeded report directory");
    Ok(inserted)
}
