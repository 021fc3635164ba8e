//! Server configuration sourced from the environment.

use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub db_path: String,
    pub log_format: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            listen_addr: env::var("BW_LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
            db_path: env::var("BW_DB_PATH").unwrap_or_else(|_| "data/budgetwise.db".to_string()),
            log_format: env::var("BW_LOG_FORMAT").unwrap_or_else(|_| "text".to_string()),
        }
    }
}
