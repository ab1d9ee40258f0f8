//! Game repository functions for domain layer.

use sea_orm::ConnectionTrait;

use crate::adapters::games_sea as games_adapter;
use crate::adapters::{boards_sea, events_sea, votes_sea};
use crate::entities::games;
use crate::errors::domain::{DomainError, InfraErrorKind};

/// A bingo game as the services see it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub game_id: i64,
    pub title: String,
    pub is_active: bool,
    pub grid_size: u8,
}

/// Listing row: a game plus its progress counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    pub game: Game,
    pub event_count: u64,
    pub closed_count: u64,
    pub player_count: u64,
}

fn grid_size_from_db(game_id: i64, raw: i32) -> Result<u8, DomainError> {
    u8::try_from(raw).map_err(|_| {
        DomainError::infra(
            InfraErrorKind::DataCorruption,
            format!("game {game_id} has invalid stored grid size {raw}"),
        )
    })
}

impl TryFrom<games::Model> for Game {
    type Error = DomainError;

    fn try_from(model: games::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            grid_size: grid_size_from_db(model.game_id, model.grid_size)?,
            game_id: model.game_id,
            title: model.title,
            is_active: model.is_active,
        })
    }
}

pub async fn find_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Option<Game>, DomainError> {
    games_adapter::find_by_id(conn, game_id)
        .await?
        .map(Game::try_from)
        .transpose()
}

/// Find game by id or fail with `NotFound(Game)`.
pub async fn require_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Game, DomainError> {
    let game = games_adapter::require_game(conn, game_id).await?;
    Game::try_from(game)
}

pub async fn find_active_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Option<Game>, DomainError> {
    games_adapter::find_active(conn)
        .await?
        .map(Game::try_from)
        .transpose()
}

pub async fn find_lowest_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Option<Game>, DomainError> {
    games_adapter::find_lowest(conn)
        .await?
        .map(Game::try_from)
        .transpose()
}

pub async fn create_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    title: &str,
    grid_size: u8,
    is_active: bool,
) -> Result<Game, DomainError> {
    let dto = games_adapter::GameCreate::new(title, i32::from(grid_size)).active(is_active);
    let game = games_adapter::create_game(conn, dto).await?;
    Game::try_from(game)
}

/// Make `game_id` the only active game. Run inside a transaction so no
/// reader sees zero or two active games.
pub async fn make_only_active<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Game, DomainError> {
    let game = require_game(conn, game_id).await?;
    games_adapter::clear_active(conn).await?;
    games_adapter::mark_active(conn, game_id).await?;
    Ok(Game {
        is_active: true,
        ..game
    })
}

/// Remove a game and everything hanging off it, children first.
pub async fn delete_game_rows<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<(), DomainError> {
    votes_sea::delete_for_game(conn, game_id).await?;
    boards_sea::delete_for_game(conn, game_id).await?;
    events_sea::delete_for_game(conn, game_id).await?;
    games_adapter::delete_by_id(conn, game_id).await?;
    Ok(())
}

pub async fn list_games_with_stats<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<GameSummary>, DomainError> {
    let rows = games_adapter::list_with_stats(conn).await?;
    rows.into_iter()
        .map(|row| {
            Ok(GameSummary {
                game: Game {
                    grid_size: grid_size_from_db(row.game_id, row.grid_size)?,
                    game_id: row.game_id,
                    title: row.title,
                    is_active: row.is_active,
                },
                event_count: row.event_count.max(0) as u64,
                closed_count: row.closed_count.max(0) as u64,
                player_count: row.player_count.max(0) as u64,
            })
        })
        .collect()
}
