//! Application state for the HTTP server.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::db::repository::ContactRepository;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Repository instance for database operations
    pub repository: Arc<dyn ContactRepository>,
    /// Server settings the router and documentation depend on
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Create a new application state with the given repository and default settings.
    pub fn new(repository: Arc<dyn ContactRepository>) -> Self {
        Self::with_config(repository, ServerConfig::default())
    }

    /// Create a new application state with explicit server settings.
    pub fn with_config(repository: Arc<dyn ContactRepository>, config: ServerConfig) -> Self {
        Self {
            repository,
            config: Arc::new(config),
        }
    }
}
