use std::sync::Arc;

use stickit_core::session::SessionRegistry;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: the pool is reference-counted and the rest sits behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: stickit_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Live login sessions keyed by the `sessionId` cookie value.
    pub sessions: Arc<SessionRegistry>,
}

impl AppState {
    /// Build state with an empty session registry honouring the configured TTL.
    pub fn new(pool: stickit_db::DbPool, config: ServerConfig) -> Self {
        let sessions = Arc::new(SessionRegistry::new(config.session_ttl()));
        Self {
            pool,
            config: Arc::new(config),
            sessions,
        }
    }
}
