//! Service configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8787;
const DEFAULT_STATIC_DIR: &str = "public";

#[derive(Clone, Debug)]
pub struct Config {
    /// Interface to bind (default: 0.0.0.0)
    pub host: String,
    /// Listen port (default: 8787)
    pub port: u16,
    /// Root directory for the frontend build (default: ./public)
    pub static_dir: PathBuf,
    /// Optional JSON roster replacing the built-in one
    pub team_catalog_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            host: env::var("API_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: env::var("API_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            static_dir: env::var("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_STATIC_DIR)),
            team_catalog_path: env::var("TEAM_CATALOG_PATH")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            team_catalog_path: None,
        }
    }
}
