use serde::{Deserialize, Serialize};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8001;
pub const DEFAULT_DB_PATH: &str = "./data/reportdir.db";

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ReportDirConfig {
    pub server: Option<ServerConfig>,
    pub database: Option<DatabaseConfig>,
    pub directory: Option<DirectoryConfig>,
    pub admin: Option<AdminConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ServerConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct DatabaseConfig {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct DirectoryConfig {
    /// Substring every report URL must contain.
    pub required_url_domain: Option<String>,
    /// JSON catalogue loaded into an empty store on startup.
    pub seed_file: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct AdminConfig {
    pub token: Option<String>,
}

impl ReportDirConfig {
    pub fn host(&self) -> Option<&str> {
        self.server.as_ref().and_then(|s| s.host.as_deref())
    }

    pub fn port(&self) -> Option<u16> {
        self.server.as_ref().and_then(|s| s.port)
    }

    pub fn db_path(&self) -> Option<&str> {
        self.database.as_ref().and_then(|d| d.path.as_deref())
    }

    pub fn required_url_domain(&self) -> Option<&str> {
        self.directory.as_ref().and_then(|d| d.required_url_domain.as_deref())
    }

    pub fn seed_file(&self) -> Option<&str> {
        self.directory.as_ref().and_then(|d| d.seed_file.as_deref())
    }

    pub fn admin_token(&self) -> Option<&str> {
        self.admin.as_ref().and_then(|a| a.token.as_deref())
    }
}
