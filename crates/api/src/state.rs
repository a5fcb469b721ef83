use std::sync::Arc;

use sitedraw_db::store::PgStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: sitedraw_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Store view over the pool, used by handlers that go through the
    /// project/draw request store traits.
    pub fn store(&self) -> PgStore {
        PgStore::new(self.pool.clone())
    }
}
