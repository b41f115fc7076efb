use std::path::PathBuf;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_UPLOAD_DIR: &str = "uploads";
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

pub struct Config {
    pub database_url: String,

    /// Directory uploaded files are written to and served from.
    pub upload_dir: PathBuf,
    pub bind_address: String,
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let max_upload_bytes = match std::env::var("MAX_UPLOAD_BYTES") {
            Ok(value) => value
                .parse::<usize>()
                .map_err(|e| ConfigError::InvalidEnvVar {
                    name: "MAX_UPLOAD_BYTES".to_string(),
                    value,
                    reason: e.to_string(),
                })?,
            Err(_) => DEFAULT_MAX_UPLOAD_BYTES,
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            upload_dir: std::env::var("UPLOAD_DIR")
                .unwrap_or_else(|_| DEFAULT_UPLOAD_DIR.to_string())
                .into(),
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            max_upload_bytes,
        })
    }
}
