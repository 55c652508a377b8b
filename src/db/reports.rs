use chrono::Utc;
use crate::directory::ReportFilter;
use crate::errors::DirectoryError;
use crate::models::{GroupCount, NewReport, Report, ReportPatch, Stats};
use super::Database;

const REPORT_COLUMNS: &str = "id, name, group_name, url, created_at, updated_at";

pub(crate) const DUPLICATE_MESSAGE: &str = "A report with that name already exists in the same group";

fn report_from_row(row: &rusqlite::Row) -> rusqlite::Result<Report> {
    Ok(Report {
        id: row.get(0)?,
        name: row.get(1)?,
        group: row.get(2)?,
        url: row.get(3)?,
        created_at: row.get(4)?,
        updated_at: row.get(5)?,
    })
}

/// Only the `(name, group_name)` index raises a plain UNIQUE failure; primary key and
/// NOT NULL failures carry their own extended codes.
fn is_unique_violation(e: &rusqlite::Error) -> bool {
    matches!(e, rusqlite::Error::SqliteFailure(err, _) if err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE)
}

impl Database {
    pub fn insert_report(&self, report: &NewReport) -> Result<Report, DirectoryError> {
        let conn = self.lock()?;
        let now = Utc::now();
        let stored = Report {
            id: uuid::Uuid::new_v4().to_string(),
            name: report.name.clone(),
            group: report.group.clone(),
            url: report.url.clone(),
            created_at: now,
            updated_at: now,
        };

        conn.execute(
            "INSERT INTO reports (id, name, group_name, url, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            rusqlite::params![stored.id, stored.name, stored.group, stored.url, stored.created_at, stored.updated_at],
        ).map_err(|e| {
            if is_unique_violation(&e) {
                DirectoryError::Duplicate(DUPLICATE_MESSAGE.into())
            } else {
                DirectoryError::Database(format!("Failed to insert report: {}", e))
            }
        })?;

        Ok(stored)
    }

    pub fn get_report(&self, id: &str) -> Result<Option<Report>, DirectoryError> {
        let conn = self.lock()?;
        let sql = format!("SELECT {} FROM reports WHERE id = ?1", REPORT_COLUMNS);
        match conn.query_row(&sql, rusqlite::params![id], report_from_row) {
            Ok(report) => Ok(Some(report)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(DirectoryError::Database(format!("Query error: {}", e))),
        }
    }

    /// Reports matching `filter`, in insertion order.
    pub fn list_reports(&self, filter: &ReportFilter) -> Result<Vec<Report>, DirectoryError> {
        let conn = self.lock()?;
        let mut sql = format!("SELECT {} FROM reports", REPORT_COLUMNS);
        let mut params: Vec<&str> = Vec::new();
        if let Some(group) = filter.group() {
            sql.push_str(" WHERE group_name = ?1");
            params.push(group);
        }
        sql.push_str(" ORDER BY rowid");

        let mut stmt = conn.prepare(&sql)
            .map_err(|e| DirectoryError::Database(format!("Query failed: {}", e)))?;
        let rows = stmt.query_map(rusqlite::params_from_iter(params), report_from_row)
            .map_err(|e| DirectoryError::Database(format!("Query error: {}", e)))?;

        let mut reports = Vec::new();
        for row in rows {
            let report = row.map_err(|e| DirectoryError::Database(format!("Row error: {}", e)))?;
            if filter.matches_name(&report.name) {
                reports.push(report);
            }
        }
        Ok(reports)
    }

    /// The report holding `(name, group)`, ignoring `exclude_id` if given.
    pub fn find_by_name_and_group(
        &self,
        name: &str,
        group: &str,
        exclude_id: Option<&str>,
    ) -> Result<Option<Report>, DirectoryError> {
        let conn = self.lock()?;
        let sql = format!(
            "SELECT {} FROM reports WHERE name = ?1 AND group_name = ?2 AND (?3 IS NULL OR id <> ?3)",
            REPORT_COLUMNS
        );
        match conn.query_row(&sql, rusqlite::params![name, group, exclude_id], report_from_row) {
            Ok(report) => Ok(Some(report)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(DirectoryError::Database(format!("Query error: {}", e))),
        }
    }

    /// Apply `patch` and refresh `updated_at`. Returns `None` when no report has `id`.
    pub fn update_report(&self, id: &str, patch: &ReportPatch) -> Result<Option<Report>, DirectoryError> {
        let affected = {
            let conn = self.lock()?;
            conn.execute(
                "UPDATE reports SET name = COALESCE(?2, name), group_name = COALESCE(?3, group_name), url = COALESCE(?4, url), updated_at = ?5 WHERE id = ?1",
                rusqlite::params![id, patch.name, patch.group, patch.url, Utc::now()],
            ).map_err(|e| {
                if is_unique_violation(&e) {
                    DirectoryError::Duplicate(DUPLICATE_MESSAGE.into())
                } else {
                    DirectoryError::Database(format!("Update failed: {}", e))
                }
            })?
        };

        if affected == 0 {
            return Ok(None);
        }
        self.get_report(id)
    }

    pub fn delete_report(&self, id: &str) -> Result<bool, DirectoryError> {
        let conn = self.lock()?;
        let affected = conn.execute("DELETE FROM reports WHERE id = ?1", rusqlite::params![id])
            .map_err(|e| DirectoryError::Database(format!("Delete failed: {}", e)))?;
        Ok(affected > 0)
    }

    /// Distinct group names, sorted ascending.
    pub fn list_groups(&self) -> Result<Vec<String>, DirectoryError> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare("SELECT DISTINCT group_name FROM reports ORDER BY group_name")
            .map_err(|e| DirectoryError::Database(format!("Query failed: {}", e)))?;
        let rows = stmt.query_map([], |row: &rusqlite::Row| row.get::<_, String>(0))
            .map_err(|e| DirectoryError::Database(format!("Query error: {}", e)))?;

        let mut groups = Vec::new();
        for row in rows {
            groups.push(row.map_err(|e| DirectoryError::Database(format!("Row error: {}", e)))?);
        }
        Ok(groups)
    }

    pub fn count_reports(&self) -> Result<usize, DirectoryError> {
        let conn = self.lock()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM reports", [], |row| row.get(0))
            .map_err(|e| DirectoryError::Database(format!("Query error: {}", e)))?;
        Ok(count as usize)
    }

    pub fn count_reports_in_group(&self, group: &str) -> Result<usize, DirectoryError> {
        let conn = self.lock()?;
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM reports WHERE group_name = ?1",
            rusqlite::params![group],
            |row| row.get(0),
        ).map_err(|e| DirectoryError::Database(format!("Query error: {}", e)))?;
        Ok(count as usize)
    }

    /// Total count plus per-group counts, largest group first.
    pub fn stats(&self) -> Result<Stats, DirectoryError> {
        let total_reports = self.count_reports()?;

        let conn = self.lock()?;
        let mut stmt = conn.prepare(
            "SELECT group_name, COUNT(*) AS n FROM reports GROUP BY group_name ORDER BY n DESC, group_name ASC"
        ).map_err(|e| DirectoryError::Database(format!("Query failed: {}", e)))?;
        let rows = stmt.query_map([], |row: &rusqlite::Row| {
            Ok(GroupCount {
                group: row.get(0)?,
                count: row.get::<_, i64>(1)? as usize,
            })
        }).map_err(|e| DirectoryError::Database(format!("Query error: {}", e)))?;

        let mut groups = Vec::new();
        for row in rows {
            groups.push(row.map_err(|e| DirectoryError::Database(format!("Row error: {}", e)))?);
        }
        Ok(Stats { total_reports, groups })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_report(name: &str, group: &str) -> NewReport {
        NewReport {
            name: name.to_string(),
            group: group.to_string(),
            url: format!("https://app.powerbi.com/groups/{}", name.len()),
        }
    }

    #[test]
    fn test_db_insert_and_get_report() {
        let db = Database::in_memory().unwrap();
        let stored = db.insert_report(&new_report("Ventas", "COMERCIALES")).unwrap();

        let fetched = db.get_report(&stored.id).unwrap().unwrap();
        assert_eq!(fetched, stored);
        assert_eq!(fetched.created_at, fetched.updated_at);
    }

    #[test]
    fn test_db_get_nonexistent_report() {
        let db = Database::in_memory().unwrap();
        assert!(db.get_report("nonexistent").unwrap().is_none());
    }

    #[test]
    fn test_db_unique_index_rejects_duplicate_pair() {
        let db = Database::in_memory().unwrap();
        db.insert_report(&new_report("Ventas", "COMERCIALES")).unwrap();

        let err = db.insert_report(&new_report("Ventas", "COMERCIALES")).unwrap_err();
        assert!(matches!(err, DirectoryError::Duplicate(_)));

        // Same name in another group is fine
        db.insert_report(&new_report("Ventas", "GERENCIA")).unwrap();
        assert_eq!(db.count_reports().unwrap(), 2);
    }

    #[test]
    fn test_db_list_reports_in_insertion_order() {
        let db = Database::in_memory().unwrap();
        for name in ["Zeta", "Alfa", "Beta"] {
            db.insert_report(&new_report(name, "COMPRAS")).unwrap();
        }

        let all = db.list_reports(&ReportFilter::default()).unwrap();
        let names: Vec<&str> = all.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Zeta", "Alfa", "Beta"]);
    }

    #[test]
    fn test_db_list_reports_filtered() {
        let db = Database::in_memory().unwrap();
        db.insert_report(&new_report("Stock almacén", "COMPRAS")).unwrap();
        db.insert_report(&new_report("Pedidos", "COMPRAS")).unwrap();
        db.insert_report(&new_report("Stock tiendas", "SUCURSALES")).unwrap();

        let by_group = db.list_reports(&ReportFilter::from_params(Some("COMPRAS"), None)).unwrap();
        assert_eq!(by_group.len(), 2);

        let by_search = db.list_reports(&ReportFilter::from_params(None, Some("STOCK"))).unwrap();
        assert_eq!(by_search.len(), 2);

        let both = db.list_reports(&ReportFilter::from_params(Some("COMPRAS"), Some("stock"))).unwrap();
        assert_eq!(both.len(), 1);
        assert_eq!(both[0].name, "Stock almacén");

        // Search never looks at the group
        let by_group_word = db.list_reports(&ReportFilter::from_params(None, Some("compras"))).unwrap();
        assert!(by_group_word.is_empty());
    }

    #[test]
    fn test_db_group_filter_is_literal_equality() {
        let db = Database::in_memory().unwrap();
        db.insert_report(&new_report("Stock", "COMPRAS")).unwrap();
        db.insert_report(&new_report("Pedidos", "COMPRAS ALMACEN")).unwrap();

        let exact = db.list_reports(&ReportFilter::from_params(Some("COMPRAS"), None)).unwrap();
        assert_eq!(exact.len(), 1);
        assert_eq!(exact[0].name, "Stock");

        assert!(db.list_reports(&ReportFilter::from_params(Some("compras"), None)).unwrap().is_empty());
        assert!(db.list_reports(&ReportFilter::from_params(Some("COMPRA"), None)).unwrap().is_empty());

        let all = db.list_reports(&ReportFilter::from_params(Some("ALL"), None)).unwrap();
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn test_db_only_pair_index_counts_as_duplicate() {
        let db = Database::in_memory().unwrap();
        let stored = db.insert_report(&new_report("Ventas", "COMERCIALES")).unwrap();
        let conn = db.lock().unwrap();
        let insert = "INSERT INTO reports (id, name, group_name, url, created_at, updated_at) VALUES (?1, ?2, ?3, 'u', 't', 't')";

        let pair = conn.execute(insert, rusqlite::params!["other-id", "Ventas", "COMERCIALES"]).unwrap_err();
        assert!(is_unique_violation(&pair));

        let primary_key = conn.execute(insert, rusqlite::params![stored.id, "Otro", "GERENCIA"]).unwrap_err();
        assert!(!is_unique_violation(&primary_key));

        let not_null = conn.execute(insert, rusqlite::params!["new-id", Option::<String>::None, "GERENCIA"]).unwrap_err();
        assert!(!is_unique_violation(&not_null));
    }

    #[test]
    fn test_db_find_by_name_and_group_excludes_id() {
        let db = Database::in_memory().unwrap();
        let stored = db.insert_report(&new_report("Ventas", "COMERCIALES")).unwrap();

        assert!(db.find_by_name_and_group("Ventas", "COMERCIALES", None).unwrap().is_some());
        assert!(db.find_by_name_and_group("Ventas", "COMERCIALES", Some(stored.id.as_str())).unwrap().is_none());
        assert!(db.find_by_name_and_group("Ventas", "GERENCIA", None).unwrap().is_none());
    }

    #[test]
    fn test_db_update_report_partial() {
        let db = Database::in_memory().unwrap();
        let stored = db.insert_report(&new_report("Ventas", "COMERCIALES")).unwrap();
        std::thread::sleep(std::time::Duration::from_millis(5));

        let patch = ReportPatch {
            url: Some("https://app.powerbi.com/groups/new".into()),
            ..Default::default()
        };
        let updated = db.update_report(&stored.id, &patch).unwrap().unwrap();
        assert_eq!(updated.name, "Ventas");
        assert_eq!(updated.group, "COMERCIALES");
        assert_eq!(updated.url, "https://app.powerbi.com/groups/new");
        assert_eq!(updated.created_at, stored.created_at);
        assert!(updated.updated_at > stored.updated_at);
    }

    #[test]
    fn test_db_update_nonexistent() {
        let db = Database::in_memory().unwrap();
        let patch = ReportPatch { name: Some("X".into()), ..Default::default() };
        assert!(db.update_report("missing", &patch).unwrap().is_none());
    }

    #[test]
    fn test_db_delete_report() {
        let db = Database::in_memory().unwrap();
        let stored = db.insert_report(&new_report("Ventas", "COMERCIALES")).unwrap();

        assert!(db.delete_report(&stored.id).unwrap());
        assert!(db.get_report(&stored.id).unwrap().is_none());
        assert!(!db.delete_report(&stored.id).unwrap());
    }

    #[test]
    fn test_db_list_groups_sorted_distinct() {
        let db = Database::in_memory().unwrap();
        db.insert_report(&new_report("A", "GERENCIA")).unwrap();
        db.insert_report(&new_report("B", "COMPRAS")).unwrap();
        db.insert_report(&new_report("C", "GERENCIA")).unwrap();

        assert_eq!(db.list_groups().unwrap(), vec!["COMPRAS", "GERENCIA"]);
    }

    #[test]
    fn test_db_stats_sorted_by_count_desc() {
        let db = Database::in_memory().unwrap();
        db.insert_report(&new_report("A", "ALTEC")).unwrap();
        db.insert_report(&new_report("B", "COMPRAS")).unwrap();
        db.insert_report(&new_report("C", "COMPRAS")).unwrap();
        db.insert_report(&new_report("D", "GERENCIA")).unwrap();
        db.insert_report(&new_report("E", "COMPRAS")).unwrap();
        db.insert_report(&new_report("F", "GERENCIA")).unwrap();

        let stats = db.stats().unwrap();
        assert_eq!(stats.total_reports, 6);
        assert_eq!(stats.groups, vec![
            GroupCount { group: "COMPRAS".into(), count: 3 },
            GroupCount { group: "GERENCIA".into(), count: 2 },
            GroupCount { group: "ALTEC".into(), count: 1 },
        ]);
    }

    #[test]
    fn test_db_stats_ties_break_by_group_name() {
        let db = Database::in_memory().unwrap();
        db.insert_report(&new_report("A", "ZONA NORTE")).unwrap();
        db.insert_report(&new_report("B", "COMPRAS")).unwrap();
        db.insert_report(&new_report("C", "ZONA NORTE")).unwrap();
        db.insert_report(&new_report("D", "COMPRAS")).unwrap();
        db.insert_report(&new_report("E", "GERENCIA")).unwrap();

        let groups: Vec<(String, usize)> = db.stats().unwrap().groups
            .into_iter()
            .map(|g| (g.group, g.count))
            .collect();
        assert_eq!(groups, vec![
            ("COMPRAS".to_string(), 2),
            ("ZONA NORTE".to_string(), 2),
            ("GERENCIA".to_string(), 1),
        ]);
    }

    #[test]
    fn test_db_stats_empty() {
        let db = Database::in_memory().unwrap();
        let stats = db.stats().unwrap();
        assert_eq!(stats.total_reports, 0);
        assert!(stats.groups.is_empty());
    }

    #[test]
    fn test_db_count_reports_in_group() {
        let db = Database::in_memory().unwrap();
        db.insert_report(&new_report("A", "COMPRAS")).unwrap();
        db.insert_report(&new_report("B", "COMPRAS")).unwrap();

        assert_eq!(db.count_reports_in_group("COMPRAS").unwrap(), 2);
        assert_eq!(db.count_reports_in_group("GERENCIA").unwrap(), 0);
    }
}
