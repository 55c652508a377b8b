/// Group value that selects every group.
pub const ALL_GROUPS: &str = "ALL";

/// Read-side predicate over reports.
///
/// The group predicate is literal equality and is pushed down to the store;
/// the name predicate is a case-insensitive substring match evaluated on the
/// decoded rows so that non-ASCII names fold correctly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportFilter {
    group: Option<String>,
    search: Option<String>,
}

impl ReportFilter {
    /// Build a filter from raw query parameters. Empty values and `ALL` mean
    /// "no constraint".
    pub fn from_params(group: Option<&str>, search: Option<&str>) -> Self {
        let group = group
            .filter(|g| !g.is_empty() && *g != ALL_GROUPS)
            .map(str::to_string);
        let search = search
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);
        Self { group, search }
    }

    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    pub fn matches_name(&self, name: &str) -> bool {
        match &self.search {
            Some(needle) => name.to_lowercase().contains(needle.as_str()),
            None => true,
        }
    }
}
