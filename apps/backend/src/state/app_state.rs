use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tokio::sync::{Mutex, MutexGuard};

use crate::config::game::GameRules;

/// Shared handles every request can reach.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Absent only in tests that never touch storage
    db: Option<DatabaseConnection>,
    pub rules: GameRules,
    /// Serializes writers from this process. SQLite hands out the write
    /// lock to one connection at a time, and a deferred transaction that
    /// upgrades from read to write fails with SQLITE_BUSY without waiting
    /// on `busy_timeout`.
    write_gate: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, rules: GameRules) -> Self {
        Self {
            db: Some(db),
            rules,
            write_gate: Arc::default(),
        }
    }

    pub fn without_db(rules: GameRules) -> Self {
        Self {
            db: None,
            rules,
            write_gate: Arc::default(),
        }
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }

    /// Wait for exclusive write access; released when the guard drops.
    pub async fn lock_writes(&self) -> MutexGuard<'_, ()> {
        self.write_gate.lock().await
    }
}
