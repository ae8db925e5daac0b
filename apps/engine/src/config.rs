use std::path::PathBuf;

use anyhow::Result;

/// Application configuration loaded from environment variables.
/// Everything is optional — the builtin catalog and "info" logging are
/// the defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to a catalog JSON file overriding the builtin one.
    pub catalog_path: Option<PathBuf>,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let catalog_path = match std::env::var("WAYPOINT_CATALOG") {
            Ok(path) if !path.trim().is_empty() => {
                Some(PathBuf::from(path.trim().to_string()))
            }
            _ => None,
        };

        Ok(Config {
            catalog_path,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Variant used by tests to avoid touching process environment.
    pub fn with_catalog_path(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if path.as_os_str().is_empty() {
            anyhow::bail!("catalog path must not be empty");
        }
        Ok(Config {
            catalog_path: Some(path),
            rust_log: "info".to_string(),
        })
    }
}
