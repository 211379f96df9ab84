use std::sync::Arc;

use lifejournal_db::Repository;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: both fields are behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// The storage backend selected at startup.
    pub repo: Arc<dyn Repository>,
    pub config: Arc<ServerConfig>,
}
