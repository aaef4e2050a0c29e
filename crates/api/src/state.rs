use std::sync::Arc;

use crate::board_cache::BoardCache;
use crate::config::ServerConfig;
use crate::describe::DescriptionGenerator;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: launchpad_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// In-memory board snapshot mirrored from the store.
    pub board: Arc<BoardCache>,
    /// AI description client; `None` when no API key is configured.
    pub describer: Option<Arc<dyn DescriptionGenerator>>,
}
