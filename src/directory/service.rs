use tracing::{debug, info};
use crate::db::Database;
use crate::db::reports::DUPLICATE_MESSAGE;
use crate::errors::DirectoryError;
use crate::models::{Report, Stats};
use super::filter::ReportFilter;
use super::validator::{normalize_group, ReportValidator};

/// Read and write operations over the report directory.
///
/// Every write is validated first; writes that touch `(name, group)` are
/// checked against existing reports before reaching the store.
#[derive(Clone)]
pub struct DirectoryService {
    db: Database,
    validator: ReportValidator,
}

impl DirectoryService {
    pub fn new(db: Database, validator: ReportValidator) -> Self {
        Self { db, validator }
    }

    pub fn db(&self) -> &Database {
        &self.db
    }

    pub fn list_reports(&self, group: Option<&str>, search: Option<&str>) -> Result<Vec<Report>, DirectoryError> {
        let filter = ReportFilter::from_params(group, search);
        debug!(group = ?filter.group(), search = ?filter.search(), "Listing reports");
        self.db.list_reports(&filter)
    }

    pub fn get_report(&self, id: &str) -> Result<Report, DirectoryError> {
        self.db.get_report(id)?
            .ok_or_else(|| DirectoryError::NotFound("Report".into()))
    }

    pub fn list_groups(&self) -> Result<Vec<String>, DirectoryError> {
        self.db.list_groups()
    }

    pub fn stats(&self) -> Result<Stats, DirectoryError> {
        self.db.stats()
    }

    pub fn create_report(&self, name: &str, group: &str, url: &str) -> Result<Report, DirectoryError> {
        let report = self.validator.validate_new(name, group, url)?;

        if self.db.find_by_name_and_group(&report.name, &report.group, None)?.is_some() {
            return Err(DirectoryError::Duplicate(DUPLICATE_MESSAGE.into()));
        }

        let stored = self.db.insert_report(&report)?;
        info!(report_id = %stored.id, group = %stored.group, "Report created");
        Ok(stored)
    }

    pub fn update_report(
        &self,
        id: &str,
        name: Option<&str>,
        group: Option<&str>,
        url: Option<&str>,
    ) -> Result<Report, DirectoryError> {
        let existing = self.get_report(id)?;
        let patch = self.validator.validate_patch(name, group, url)?;

        if patch.touches_key() {
            let new_name = patch.name.as_deref().unwrap_or(&existing.name);
            let new_group = patch.group.as_deref().unwrap_or(&existing.group);
            if self.db.find_by_name_and_group(new_name, new_group, Some(id))?.is_some() {
                return Err(DirectoryError::Duplicate(DUPLICATE_MESSAGE.into()));
            }
        }

        let updated = self.db.update_report(id, &patch)?
            .ok_or_else(|| DirectoryError::NotFound("Report".into()))?;
        info!(report_id = %id, "Report updated");
        Ok(updated)
    }

    pub fn delete_report(&self, id: &str) -> Result<(), DirectoryError> {
        if !self.db.delete_report(id)? {
            return Err(DirectoryError::NotFound("Report".into()));
        }
        info!(report_id = %id, "Report deleted");
        Ok(())
    }

    /// Accept a new group label. Nothing is stored until a report uses it.
    pub fn create_group(&self, name: &str) -> Result<String, DirectoryError> {
        let group = normalize_group(name)?;
        if self.db.count_reports_in_group(&group)? > 0 {
            return Err(DirectoryError::Duplicate("Group already exists".into()));
        }
        info!(group = %group, "Group accepted");
        Ok(group)
    }

    /// Drop a group label; refused while any report references it.
    pub fn delete_group(&self, name: &str) -> Result<String, DirectoryError> {
        let group = normalize_group(name)?;
        let count = self.db.count_reports_in_group(&group)?;
        if count > 0 {
            return Err(DirectoryError::GroupInUse { group, count });
        }
        info!(group = %group, "Group deleted");
        Ok(group)
    }
}
