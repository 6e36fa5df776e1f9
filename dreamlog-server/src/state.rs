//! Application state shared across handlers.

use std::sync::Arc;

use rusqlite::Connection;

use dreamlog_core::AppConfig;

use crate::db::Database;
use crate::error::ServerResult;

/// Shared application state: the database handle and the loaded config.
///
/// Holds no request-scoped resources: connections are opened per request
/// through [`AppState::connect`], never stored here.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    db: Database,
    config: AppConfig,
}

impl AppState {
    pub fn new(db: Database, config: AppConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner { db, config }),
        }
    }

    /// Open this request's connection.
    pub fn connect(&self) -> ServerResult<Connection> {
        self.inner.db.connect()
    }

    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }
}
