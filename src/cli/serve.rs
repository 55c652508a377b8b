use std::path::PathBuf;
use crate::api;
use crate::cli::commands::ServeArgs;
use crate::config::{self, ReportDirConfig, DEFAULT_DB_PATH, DEFAULT_HOST, DEFAULT_PORT};
use crate::directory::{self, DEFAULT_URL_DOMAIN};
use crate::errors::DirectoryError;
use tracing::info;

pub const ADMIN_TOKEN_ENV: &str = "REPORTDIR_ADMIN_TOKEN";

/// Effective server settings: CLI flags, then config file, then defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub db_path: String,
    pub required_url_domain: String,
    pub seed_file: Option<String>,
    pub admin_token: Option<String>,
}

impl ServerSettings {
    pub fn resolve(args: &ServeArgs, file_config: &ReportDirConfig, env_token: Option<String>) -> Self {
        Self {
            host: args.host.clone()
                .or_else(|| file_config.host().map(str::to_string))
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: args.port.or(file_config.port()).unwrap_or(DEFAULT_PORT),
            db_path: resolve_db_path(args.db.as_deref(), file_config),
            required_url_domain: resolve_url_domain(args.url_domain.as_deref(), file_config),
            seed_file: args.seed.clone().or_else(|| file_config.seed_file().map(str::to_string)),
            admin_token: env_token
                .filter(|t| !t.is_empty())
                .or_else(|| file_config.admin_token().map(str::to_string)),
        }
    }
}

pub(crate) fn resolve_db_path(flag: Option<&str>, file_config: &ReportDirConfig) -> String {
    flag.or(file_config.db_path()).unwrap_or(DEFAULT_DB_PATH).to_string()
}

pub(crate) fn resolve_url_domain(flag: Option<&str>, file_config: &ReportDirConfig) -> String {
    flag.or(file_config.required_url_domain()).unwrap_or(DEFAULT_URL_DOMAIN).to_string()
}

pub(crate) async fn load_optional_config(path: Option<&str>) -> Result<ReportDirConfig, DirectoryError> {
    match path {
        Some(p) => config::parse_config(&PathBuf::from(p)).await,
        None => Ok(ReportDirConfig::default()),
    }
}

pub async fn handle_serve(args: ServeArgs) -> Result<(), DirectoryError> {
    let file_config = load_optional_config(args.config.as_deref()).await?;
    let settings = ServerSettings::resolve(&args, &file_config, std::env::var(ADMIN_TOKEN_ENV).ok());

    info!(
        host = %settings.host,
        port = settings.port,
        db = %settings.db_path,
        url_domain = %settings.required_url_domain,
        admin_auth = settings.admin_token.is_some(),
        "Starting API server"
    );

    let state = api::create_app_state(
        &settings.db_path,
        &settings.required_url_domain,
        settings.admin_token.clone(),
    )?;

    if let Some(seed_file) = &settings.seed_file {
        let entries = directory::load_seed_file(&PathBuf::from(seed_file)).await?;
        directory::seed_if_empty(&state.service, &entries)?;
    }

    let app = api::build_router(state);

    let addr = format!("{}:{}", settings.host, settings.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| DirectoryError::Internal(format!("Server error: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parser::parse_config_str;

    fn args() -> ServeArgs {
        ServeArgs { config: None, port: None, host: None, db: None, url_domain: None, seed: None }
    }

    #[test]
    fn test_defaults() {
        let settings = ServerSettings::resolve(&args(), &ReportDirConfig::default(), None);
        assert_eq!(settings.host, "0.0.0.0");
        assert_eq!(settings.port, 8001);
        assert_eq!(settings.db_path, "./data/reportdir.db");
        assert_eq!(settings.required_url_domain, "app.powerbi.com");
        assert!(settings.seed_file.is_none());
        assert!(settings.admin_token.is_none());
    }

    #[test]
    fn test_flags_override_config() {
        let file_config = parse_config_str("server:\n  port: 9000\n  host: 127.0.0.1\n").unwrap();
        let mut cli = args();
        cli.port = Some(7000);

        let settings = ServerSettings::resolve(&cli, &file_config, None);
        assert_eq!(settings.port, 7000);
        assert_eq!(settings.host, "127.0.0.1");
    }

    #[test]
    fn test_env_token_overrides_config() {
        let file_config = parse_config_str("admin:\n  token: from-file\n").unwrap();

        let settings = ServerSettings::resolve(&args(), &file_config, Some("from-env".into()));
        assert_eq!(settings.admin_token.as_deref(), Some("from-env"));

        let settings = ServerSettings::resolve(&args(), &file_config, Some(String::new()));
        assert_eq!(settings.admin_token.as_deref(), Some("from-file"));
    }
}
