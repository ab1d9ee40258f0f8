//! Vote repository functions.

use sea_orm::ConnectionTrait;
use time::OffsetDateTime;

use crate::adapters::votes_sea;
use crate::errors::domain::DomainError;

pub async fn has_voted<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    event_id: i64,
    user_id: i64,
) -> Result<bool, DomainError> {
    Ok(votes_sea::find(conn, game_id, event_id, user_id)
        .await?
        .is_some())
}

/// Record a vote; a second vote by the same user maps to `DuplicateVote`.
pub async fn insert_vote<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    event_id: i64,
    user_id: i64,
) -> Result<OffsetDateTime, DomainError> {
    Ok(votes_sea::insert(conn, game_id, event_id, user_id).await?)
}

pub async fn count_votes<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    event_id: i64,
) -> Result<u64, DomainError> {
    Ok(votes_sea::count_for_event(conn, game_id, event_id).await?)
}
