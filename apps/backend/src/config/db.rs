use std::time::Duration;

use super::var_or;
use crate::error::AppError;

/// Which flavor of SQLite database the pool opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbKind {
    SqliteFile,
    SqliteMemory,
}

pub const MEMORY_PATH: &str = ":memory:";

/// Connection settings for the game store.
#[derive(Debug, Clone, PartialEq)]
pub struct DbSettings {
    pub path: String,
    pub busy_timeout_ms: u64,
    pub pool_max: u32,
    pub acquire_timeout_ms: u64,
}

impl Default for DbSettings {
    fn default() -> Self {
        Self {
            path: "bingo.db".to_string(),
            busy_timeout_ms: 5_000,
            pool_max: 4,
            acquire_timeout_ms: 5_000,
        }
    }
}

impl DbSettings {
    /// Settings from `BINGO_DB_*` variables, defaults for anything unset.
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = Self::default();
        let settings = Self {
            path: var_or("BINGO_DB_PATH", defaults.path)?,
            busy_timeout_ms: var_or("BINGO_DB_BUSY_TIMEOUT_MS", defaults.busy_timeout_ms)?,
            pool_max: var_or("BINGO_DB_POOL_MAX", defaults.pool_max)?,
            acquire_timeout_ms: var_or("BINGO_DB_ACQUIRE_TIMEOUT_MS", defaults.acquire_timeout_ms)?,
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Private in-memory database, used by tests.
    pub fn in_memory() -> Self {
        Self {
            path: MEMORY_PATH.to_string(),
            ..Self::default()
        }
    }

    pub fn kind(&self) -> DbKind {
        if self.path == MEMORY_PATH {
            DbKind::SqliteMemory
        } else {
            DbKind::SqliteFile
        }
    }

    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_millis(self.acquire_timeout_ms)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.path.trim().is_empty() {
            return Err(AppError::config("BINGO_DB_PATH must not be empty"));
        }
        if self.pool_max == 0 {
            return Err(AppError::config("BINGO_DB_POOL_MAX must be at least 1"));
        }
        Ok(())
    }
}
