use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Server configuration from environment variables, all with defaults.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    /// Static files served under `/assets` (css, images, the JSON documents).
    pub assets_dir: PathBuf,
    /// Directory holding the JSON documents the pages render from.
    pub data_dir: PathBuf,
    /// Where the theme preference is persisted.
    pub theme_file: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .context("PORT must be a valid port number")?;
        let assets_dir =
            PathBuf::from(std::env::var("ASSETS_DIR").unwrap_or_else(|_| "assets".to_string()));
        let data_dir = std::env::var("DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| assets_dir.join("data"));
        let theme_file = std::env::var("THEME_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("theme.json"));
        Ok(AppConfig {
            port,
            assets_dir,
            data_dir,
            theme_file,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}
