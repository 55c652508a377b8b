pub mod filter;
pub mod validator;
pub mod service;
pub mod seed;

pub use filter::{ReportFilter, ALL_GROUPS};
pub use validator::{ReportValidator, DEFAULT_URL_DOMAIN};
pub use service::DirectoryService;
pub use seed::{load_seed_file, seed_if_empty, SeedEntry};
