//! SeaORM adapter for games - generic over ConnectionTrait.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveEnum, ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, FromQueryResult,
    NotSet, QueryFilter, QueryOrder, Set, Statement, Value,
};

use crate::entities::{games, EventStatus};

pub mod dto;

pub use dto::{GameCreate, GameStatsRow};

// Adapter functions return DbErr; the repos layer maps to DomainError.

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Option<games::Model>, sea_orm::DbErr> {
    games::Entity::find_by_id(game_id).one(conn).await
}

/// Find game by id, or fail with a structured `GAME_NOT_FOUND:<id>` error.
pub async fn require_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<games::Model, sea_orm::DbErr> {
    find_by_id(conn, game_id)
        .await?
        .ok_or_else(|| sea_orm::DbErr::Custom(format!("GAME_NOT_FOUND:{game_id}")))
}

pub async fn find_active<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Option<games::Model>, sea_orm::DbErr> {
    games::Entity::find()
        .filter(games::Column::IsActive.eq(true))
        .order_by_asc(games::Column::GameId)
        .one(conn)
        .await
}

/// Lowest-numbered remaining game; the promotion target after a delete.
pub async fn find_lowest<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Option<games::Model>, sea_orm::DbErr> {
    games::Entity::find()
        .order_by_asc(games::Column::GameId)
        .one(conn)
        .await
}

pub async fn create_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: GameCreate,
) -> Result<games::Model, sea_orm::DbErr> {
    let game_active = games::ActiveModel {
        game_id: NotSet,
        title: Set(dto.title),
        is_active: Set(dto.is_active),
        grid_size: Set(dto.grid_size),
    };

    game_active.insert(conn).await
}

/// Clear the active flag everywhere. Returns the number of games touched.
pub async fn clear_active<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<u64, sea_orm::DbErr> {
    let result = games::Entity::update_many()
        .col_expr(games::Column::IsActive, Expr::value(false))
        .filter(games::Column::IsActive.eq(true))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}

pub async fn mark_active<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let result = games::Entity::update_many()
        .col_expr(games::Column::IsActive, Expr::value(true))
        .filter(games::Column::GameId.eq(game_id))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}

pub async fn delete_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let result = games::Entity::delete_by_id(game_id).exec(conn).await?;
    Ok(result.rows_affected)
}

/// All games, newest first, with event/closed/player counts.
pub async fn list_with_stats<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<GameStatsRow>, sea_orm::DbErr> {
    let sql = r#"
        SELECT g.game_id, g.title, g.grid_size, g.is_active,
               (SELECT COUNT(*) FROM events e WHERE e.game_id = g.game_id) AS event_count,
               (SELECT COUNT(*) FROM events e
                 WHERE e.game_id = g.game_id AND e.status = ?) AS closed_count,
               (SELECT COUNT(*) FROM boards b WHERE b.game_id = g.game_id) AS player_count
        FROM games g
        ORDER BY g.game_id DESC
    "#;

    GameStatsRow::find_by_statement(Statement::from_sql_and_values(
        conn.get_database_backend(),
        sql,
        [Value::from(EventStatus::Closed.to_value())],
    ))
    .all(conn)
    .await
}
