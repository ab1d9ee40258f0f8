use std::str::FromStr;

use migration::{migrate, MigrationCommand};
use sea_orm::{DatabaseConnection, SqlxSqliteConnector};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use tracing::info;

use crate::config::db::{DbKind, DbSettings};
use crate::error::AppError;

/// Per-connection statements run by the pool's `after_connect` hook.
fn build_session_statements(settings: &DbSettings) -> Vec<String> {
    vec![
        "PRAGMA foreign_keys = ON;".to_string(),
        format!("PRAGMA busy_timeout = {};", settings.busy_timeout_ms),
    ]
}

fn connect_options(settings: &DbSettings) -> Result<SqliteConnectOptions, AppError> {
    match settings.kind() {
        DbKind::SqliteMemory => SqliteConnectOptions::from_str("sqlite::memory:")
            .map_err(|e| AppError::config(format!("invalid in-memory sqlite options: {e}"))),
        DbKind::SqliteFile => Ok(SqliteConnectOptions::new()
            .filename(&settings.path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)),
    }
}

/// Open the SQLite pool described by `settings`.
///
/// An in-memory database lives only as long as its connection, so that
/// kind is pinned to a single connection that never idles out.
pub async fn connect_db(settings: &DbSettings) -> Result<DatabaseConnection, AppError> {
    settings.validate()?;
    let kind = settings.kind();
    let options = connect_options(settings)?;
    let statements = build_session_statements(settings);

    let pool_options = match kind {
        DbKind::SqliteMemory => SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None),
        DbKind::SqliteFile => SqlitePoolOptions::new().max_connections(settings.pool_max),
    };

    let pool = pool_options
        .acquire_timeout(settings.acquire_timeout())
        .after_connect(move |conn, _meta| {
            let statements = statements.clone();
            Box::pin(async move {
                for stmt in statements {
                    sqlx::query(&stmt).execute(&mut *conn).await?;
                }
                Ok(())
            })
        })
        .connect_with(options)
        .await
        .map_err(|e| AppError::db(format!("failed to open sqlite pool: {e}")))?;

    info!(
        db_kind = ?kind,
        path = %settings.path,
        pool_max = settings.pool_max,
        busy_timeout_ms = settings.busy_timeout_ms,
        "database pool ready"
    );

    Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
}

/// Single entrypoint used by state building: open the pool, then migrate up.
pub async fn bootstrap_db(settings: &DbSettings) -> Result<DatabaseConnection, AppError> {
    let conn = connect_db(settings).await?;
    migrate(&conn, MigrationCommand::Up)
        .await
        .map_err(|e| AppError::db(format!("migration failed: {e}")))?;
    Ok(conn)
}
