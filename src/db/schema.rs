pub const CREATE_TABLES: &str = "
CREATE TABLE IF NOT EXISTS reports (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    group_name TEXT NOT NULL,
    url TEXT NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE UNIQUE INDEX IF NOT EXISTS idx_reports_name_group ON reports(name, group_name);
CREATE INDEX IF NOT EXISTS idx_reports_group ON reports(group_name);
";
