pub mod api;
pub mod cli;
pub mod config;
pub mod db;
pub mod directory;
pub mod errors;
pub mod models;
