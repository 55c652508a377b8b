pub mod admin;
pub mod groups;
pub mod health;
pub mod reports;
pub mod stats;
