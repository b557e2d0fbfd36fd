/// Built-in vendor model tables
pub mod models;
/// Configuration file names and environment variables
pub mod app;
