use std::path::PathBuf;
use crate::cli::commands::SeedArgs;
use crate::cli::serve::{load_optional_config, resolve_db_path, resolve_url_domain};
use crate::db::Database;
use crate::directory::{self, DirectoryService, ReportValidator};
use crate::errors::DirectoryError;
use tracing::info;

pub async fn handle_seed(args: SeedArgs) -> Result<(), DirectoryError> {
    let file_config = load_optional_config(args.config.as_deref()).await?;
    let db_path = resolve_db_path(args.db.as_deref(), &file_config);
    let url_domain = resolve_url_domain(args.url_domain.as_deref(), &file_config);

    info!(file = %args.file, db = %db_path, "Seeding report directory");

    let entries = directory::load_seed_file(&PathBuf::from(&args.file)).await?;
    let service = DirectoryService::new(Database::new(&db_path)?, ReportValidator::new(url_domain));
    let inserted = directory::seed_if_empty(&service, &entries)?;

    println!("Inserted {} of {} reports into {}", inserted, entries.len(), db_path);
    Ok(())
}
