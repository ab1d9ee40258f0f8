//! SeaORM -> DomainError translation helpers.
//!
//! Adapters return `sea_orm::DbErr`; repos convert it into
//! `crate::errors::domain::DomainError` here, and handlers map that to
//! `AppError` via `From`.

use tracing::{error, warn};

use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};
use crate::trace_ctx;

const UNIQUE_PREFIX: &str = "UNIQUE constraint failed: ";

/// Extract the column list from SQLite "UNIQUE constraint failed: t.a, t.b" messages.
fn extract_sqlite_unique_columns(error_msg: &str) -> Option<&str> {
    let start = error_msg.find(UNIQUE_PREFIX)? + UNIQUE_PREFIX.len();
    let rest = &error_msg[start..];
    let end = rest.find(['\n', '"', ')']).unwrap_or(rest.len());
    Some(rest[..end].trim())
}

/// Map the violated table to a game rule conflict.
fn map_unique_columns_to_conflict(columns: &str) -> Option<(ConflictKind, &'static str)> {
    let table = columns.split('.').next()?;
    match table {
        "boards" => Some((
            ConflictKind::DuplicateBoard,
            "Player already has a board in this game",
        )),
        "votes" => Some((
            ConflictKind::DuplicateVote,
            "You have already voted for this event",
        )),
        _ => None,
    }
}

/// Translate a `DbErr` into a `DomainError` with sanitized detail.
pub fn map_db_err(e: sea_orm::DbErr) -> DomainError {
    let error_msg = e.to_string();
    let trace_id = trace_ctx::trace_id();

    match &e {
        sea_orm::DbErr::RecordNotFound(_) => {
            return DomainError::not_found(
                NotFoundKind::Other("Record".into()),
                "Record not found",
            );
        }
        sea_orm::DbErr::Custom(msg) if msg.starts_with("GAME_NOT_FOUND:") => {
            if let Some(game_id) = msg
                .strip_prefix("GAME_NOT_FOUND:")
                .and_then(|s| s.parse::<i64>().ok())
            {
                warn!(trace_id = %trace_id, game_id, "Game not found");
                return DomainError::not_found(
                    NotFoundKind::Game,
                    format!("Game {game_id} not found"),
                );
            }
            return DomainError::not_found(NotFoundKind::Game, "Game not found");
        }
        sea_orm::DbErr::ConnectionAcquire(_) | sea_orm::DbErr::Conn(_) => {
            warn!(trace_id = %trace_id, raw_error = %error_msg, "Database unavailable");
            return DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable");
        }
        _ => {}
    }

    if error_msg.contains("UNIQUE constraint failed") {
        warn!(trace_id = %trace_id, raw_error = %error_msg, "Unique constraint violation");

        if let Some((kind, detail)) =
            extract_sqlite_unique_columns(&error_msg).and_then(map_unique_columns_to_conflict)
        {
            return DomainError::conflict(kind, detail);
        }

        return DomainError::conflict(
            ConflictKind::Other("Unique".into()),
            "Unique constraint violation",
        );
    }

    if error_msg.contains("FOREIGN KEY constraint failed") {
        warn!(trace_id = %trace_id, raw_error = %error_msg, "Foreign key constraint violation");
        return DomainError::validation_other("Foreign key constraint violation");
    }

    if error_msg.contains("database is locked")
        || error_msg.contains("database is busy")
        || error_msg.contains("timed out")
    {
        warn!(trace_id = %trace_id, raw_error = %error_msg, "Database busy or timed out");
        return DomainError::infra(InfraErrorKind::Timeout, "Database timeout");
    }

    error!(trace_id = %trace_id, raw_error = %error_msg, "Unhandled database error");
    DomainError::infra(
        InfraErrorKind::Other("DbErr".into()),
        "Database operation failed",
    )
}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        map_db_err(e)
    }
}
