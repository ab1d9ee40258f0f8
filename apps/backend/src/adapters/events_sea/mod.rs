//! SeaORM adapter for per-game events.

use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::entities::{events, EventStatus};

pub mod dto;

pub use dto::EventCreate;

/// Insert all rows with status OPEN. Empty input is a no-op.
pub async fn insert_many<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    rows: Vec<EventCreate>,
) -> Result<u64, sea_orm::DbErr> {
    if rows.is_empty() {
        return Ok(0);
    }

    let models = rows.into_iter().map(|row| events::ActiveModel {
        event_id: Set(row.event_id),
        game_id: Set(game_id),
        description: Set(row.description),
        status: Set(EventStatus::Open),
    });

    events::Entity::insert_many(models)
        .exec_without_returning(conn)
        .await
}

pub async fn find<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    event_id: i64,
) -> Result<Option<events::Model>, sea_orm::DbErr> {
    events::Entity::find_by_id((event_id, game_id)).one(conn).await
}

pub async fn list_for_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<events::Model>, sea_orm::DbErr> {
    events::Entity::find()
        .filter(events::Column::GameId.eq(game_id))
        .order_by_asc(events::Column::EventId)
        .all(conn)
        .await
}

/// Flip OPEN -> CLOSED. Returns false when the event was already closed
/// (or missing), so concurrent closers see exactly one winner.
pub async fn close_if_open<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    event_id: i64,
) -> Result<bool, sea_orm::DbErr> {
    let result = events::Entity::update_many()
        .col_expr(events::Column::Status, Expr::value(EventStatus::Closed))
        .filter(events::Column::GameId.eq(game_id))
        .filter(events::Column::EventId.eq(event_id))
        .filter(events::Column::Status.eq(EventStatus::Open))
        .exec(conn)
        .await?;
    Ok(result.rows_affected == 1)
}

pub async fn delete_for_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let result = events::Entity::delete_many()
        .filter(events::Column::GameId.eq(game_id))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}
