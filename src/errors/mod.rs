pub mod types;
pub mod classification;

pub use types::DirectoryError;
pub use classification::ErrorClassification;
