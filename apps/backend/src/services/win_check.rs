//! Blackout win detection.

use sea_orm::ConnectionTrait;
use tracing::info;

use crate::domain::board::cell_count;
use crate::errors::domain::DomainError;
use crate::repos::boards;

/// User ids whose every square is closed, ordered by board id.
///
/// Read-only, so repeating it after a racing close is harmless.
pub async fn check_for_winners<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    grid_size: u8,
) -> Result<Vec<i64>, DomainError> {
    let needed = cell_count(grid_size) as u64;
    let winners: Vec<i64> = boards::closed_counts(conn, game_id)
        .await?
        .into_iter()
        .filter(|progress| progress.closed == needed)
        .map(|progress| progress.user_id)
        .collect();

    if !winners.is_empty() {
        info!(game_id, ?winners, "bingo");
    }
    Ok(winners)
}
