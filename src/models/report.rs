use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named link to an externally hosted report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub id: String,
    pub name: String,
    pub group: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated fields for a report that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReport {
    pub name: String,
    pub group: String,
    pub url: String,
}

/// Validated partial update. `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportPatch {
    pub name: Option<String>,
    pub group: Option<String>,
    pub url: Option<String>,
}

impl ReportPatch {
    /// Whether applying the patch can change the `(name, group)` key.
    pub fn touches_key(&self) -> bool {
        self.name.is_some() || self.group.is_some()
    }
}

/// Number of reports referencing one group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupCount {
    #[serde(rename = "_id")]
    pub group: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub total_reports: usize,
    pub groups: Vec<GroupCount>,
}
