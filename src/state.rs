//! Application state management

use std::path::Path;
use std::sync::Arc;

use crate::config::Config;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: Config,
}

impl AppState {
    /// Create a new application state
    pub fn new(config: Config) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config }),
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Vertical tolerance used for row clustering
    pub fn row_tolerance(&self) -> f32 {
        self.inner.config.extract.row_tolerance
    }

    /// Directory generated transfer documents are written to
    pub fn downloads_dir(&self) -> &Path {
        &self.inner.config.downloads.dir
    }
}
