//! SeaORM adapter for event votes.

use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter, Set};
use time::OffsetDateTime;

use crate::entities::votes;

pub async fn find<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    event_id: i64,
    user_id: i64,
) -> Result<Option<votes::Model>, sea_orm::DbErr> {
    votes::Entity::find_by_id((event_id, game_id, user_id))
        .one(conn)
        .await
}

/// Insert a vote stamped with the current time. A repeat vote violates the
/// primary key and surfaces as a unique-constraint error.
pub async fn insert<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    event_id: i64,
    user_id: i64,
) -> Result<OffsetDateTime, sea_orm::DbErr> {
    let voted_at = OffsetDateTime::now_utc();
    let vote = votes::ActiveModel {
        event_id: Set(event_id),
        game_id: Set(game_id),
        user_id: Set(user_id),
        voted_at: Set(voted_at),
    };

    votes::Entity::insert(vote)
        .exec_without_returning(conn)
        .await?;
    Ok(voted_at)
}

pub async fn count_for_event<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    event_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    votes::Entity::find()
        .filter(votes::Column::GameId.eq(game_id))
        .filter(votes::Column::EventId.eq(event_id))
        .count(conn)
        .await
}

pub async fn delete_for_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let result = votes::Entity::delete_many()
        .filter(votes::Column::GameId.eq(game_id))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}
