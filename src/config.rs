//! Configuration management for Estoque Server

use std::env;
use std::path::PathBuf;

use crate::listing::DEFAULT_ROW_TOLERANCE;

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub extract: ExtractConfig,
    pub downloads: DownloadsConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// Vertical tolerance for row clustering, in PDF units
    pub row_tolerance: f32,
}

#[derive(Debug, Clone)]
pub struct DownloadsConfig {
    /// Directory where generated transfer documents are written and served
    pub dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3001,
            },
            extract: ExtractConfig {
                row_tolerance: DEFAULT_ROW_TOLERANCE,
            },
            downloads: DownloadsConfig {
                dir: PathBuf::from("./downloads"),
            },
        }
    }
}

impl Config {
    /// Build the configuration from environment variables. Every value has
    /// a default; unreadable or unparseable values fall back to it.
    pub fn from_env() -> Self {
        Config {
            server: ServerConfig {
                host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("SERVER_PORT")
                    .unwrap_or_else(|_| "3001".to_string())
                    .parse()
                    .unwrap_or(3001),
            },
            extract: ExtractConfig {
                row_tolerance: env::var("ROW_TOLERANCE")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(DEFAULT_ROW_TOLERANCE),
            },
            downloads: DownloadsConfig {
                dir: env::var("DOWNLOADS_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| PathBuf::from("./downloads")),
            },
        }
    }
}
