/// Database configuration and connection management
pub mod database;

/// Plant catalog seed configuration from config.toml
pub mod plants;
