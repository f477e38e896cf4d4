//! Shared application state for the HTTP server.

use std::sync::Arc;

use cloudhop::io::config::{CloudhopConfig, LimitsConfig};

/// Read-only state shared by every request handler.
///
/// Each request is an independent, pure computation; nothing here is
/// mutated after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<CloudhopConfig>,
}

impl AppState {
    pub fn new(config: CloudhopConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub fn limits(&self) -> &LimitsConfig {
        &self.config.limits
    }
}
