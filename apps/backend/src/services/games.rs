//! Game lifecycle: creation, activation, deletion and read views.

use rand::Rng;
use sea_orm::{ConnectionTrait, DatabaseTransaction};
use tracing::{debug, info};

use crate::domain::board::{cell_count, generate_board, validate_grid_size};
use crate::domain::csv_events::parse_events;
use crate::errors::domain::{DomainError, ForbiddenKind, NotFoundKind, ValidationKind};
use crate::repos::boards::{self, BoardCell};
use crate::repos::events::{self, Event};
use crate::repos::games::{self, Game, GameSummary};

/// Everything a caller supplies to start a game.
#[derive(Debug, Clone)]
pub struct CreateGame {
    pub title: String,
    pub grid_size: i64,
    pub player_ids: Vec<i64>,
    pub events_csv: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedGame {
    pub game: Game,
    pub event_count: usize,
    pub player_ids: Vec<i64>,
    /// True when the game became active because none was
    pub activated: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletedGame {
    pub game: Game,
    /// Game promoted to active because the deleted one was active
    pub promoted: Option<Game>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEvents {
    pub game: Game,
    pub events: Vec<Event>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    pub game: Game,
    pub user_id: i64,
    pub board_id: i64,
    /// Row-major, `grid_size²` cells
    pub cells: Vec<BoardCell>,
}

impl BoardView {
    /// Cells grouped into rows.
    pub fn rows(&self) -> Vec<&[BoardCell]> {
        let width = usize::from(self.game.grid_size).max(1);
        self.cells.chunks(width).collect()
    }
}

/// A creation request that passed every input check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedGame {
    pub title: String,
    pub grid_size: u8,
    pub player_ids: Vec<i64>,
    pub descriptions: Vec<String>,
}

/// Check a creation request without touching storage.
pub fn validate_new_game(req: &CreateGame) -> Result<ValidatedGame, DomainError> {
    let grid_size = validate_grid_size(req.grid_size)?;

    if req.player_ids.is_empty() {
        return Err(DomainError::validation(
            ValidationKind::NoPlayers,
            "At least one player is required",
        ));
    }

    let title = req.title.trim();
    if title.is_empty() {
        return Err(DomainError::validation(
            ValidationKind::InvalidTitle,
            "Game title must not be blank",
        ));
    }

    let descriptions: Vec<String> = parse_events(&req.events_csv)
        .into_iter()
        .map(|e| e.description)
        .collect();
    if descriptions.is_empty() {
        return Err(DomainError::validation(
            ValidationKind::NoEvents,
            "The events file contained no events",
        ));
    }

    let needed = cell_count(grid_size);
    if descriptions.len() < needed {
        return Err(DomainError::validation(
            ValidationKind::InsufficientEvents,
            format!(
                "A {grid_size}x{grid_size} board needs at least {needed} events, the file has {}",
                descriptions.len()
            ),
        ));
    }

    Ok(ValidatedGame {
        title: title.to_string(),
        grid_size,
        player_ids: req.player_ids.clone(),
        descriptions,
    })
}

/// Explicit game id, or the active game when none is given.
pub async fn resolve_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: Option<i64>,
) -> Result<Game, DomainError> {
    match game_id {
        Some(id) => games::require_game(conn, id).await,
        None => games::find_active_game(conn).await?.ok_or_else(|| {
            DomainError::not_found(
                NotFoundKind::NoActiveGame,
                "No active game; specify a game id",
            )
        }),
    }
}

/// Game lifecycle service.
pub struct GameService;

impl GameService {
    pub fn new() -> Self {
        Self
    }

    /// Create a game with its events and one random board per player.
    ///
    /// Runs on the caller's transaction; any failure (e.g. a repeated
    /// player id) leaves nothing behind once the caller rolls back.
    pub async fn create_game<R: Rng + Send>(
        &self,
        txn: &DatabaseTransaction,
        rng: &mut R,
        req: CreateGame,
    ) -> Result<CreatedGame, DomainError> {
        let valid = validate_new_game(&req)?;

        let activate = games::find_active_game(txn).await?.is_none();
        let game = games::create_game(txn, &valid.title, valid.grid_size, activate).await?;

        let events = events::insert_events(txn, game.game_id, &valid.descriptions).await?;
        let event_ids: Vec<i64> = events.iter().map(|e| e.event_id).collect();

        for &user_id in &valid.player_ids {
            let board = boards::create_board(txn, game.game_id, user_id, valid.grid_size).await?;
            let placements = generate_board(&event_ids, valid.grid_size, rng)?;
            boards::insert_squares(txn, board.board_id, &placements).await?;
        }

        info!(
            game_id = game.game_id,
            title = %game.title,
            grid_size = game.grid_size,
            events = events.len(),
            players = valid.player_ids.len(),
            activated = activate,
            "game created"
        );

        Ok(CreatedGame {
            game,
            event_count: events.len(),
            player_ids: valid.player_ids,
            activated: activate,
        })
    }

    /// Delete a game and all its rows; promote the lowest remaining game
    /// if the deleted one was active.
    pub async fn delete_game(
        &self,
        txn: &DatabaseTransaction,
        game_id: i64,
    ) -> Result<DeletedGame, DomainError> {
        let game = games::require_game(txn, game_id).await?;
        games::delete_game_rows(txn, game_id).await?;

        let promoted = if game.is_active {
            match games::find_lowest_game(txn).await? {
                Some(next) => Some(games::make_only_active(txn, next.game_id).await?),
                None => None,
            }
        } else {
            None
        };

        info!(
            game_id,
            was_active = game.is_active,
            promoted = ?promoted.as_ref().map(|g| g.game_id),
            "game deleted"
        );

        Ok(DeletedGame { game, promoted })
    }

    pub async fn set_active_game(
        &self,
        txn: &DatabaseTransaction,
        game_id: i64,
    ) -> Result<Game, DomainError> {
        let game = games::make_only_active(txn, game_id).await?;
        info!(game_id, "game activated");
        Ok(game)
    }

    pub async fn list_games<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
    ) -> Result<Vec<GameSummary>, DomainError> {
        games::list_games_with_stats(conn).await
    }

    pub async fn list_events<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        game_id: Option<i64>,
    ) -> Result<GameEvents, DomainError> {
        let game = resolve_game(conn, game_id).await?;
        let events = events::list_events(conn, game.game_id).await?;
        Ok(GameEvents { game, events })
    }

    pub async fn view_board<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        game_id: Option<i64>,
        user_id: i64,
    ) -> Result<BoardView, DomainError> {
        let game = resolve_game(conn, game_id).await?;
        let Some(board) = boards::find_board(conn, game.game_id, user_id).await? else {
            debug!(game_id = game.game_id, user_id, "board requested for non-player");
            return Err(DomainError::forbidden(
                ForbiddenKind::NotAPlayer,
                format!("User {user_id} is not playing game {}", game.game_id),
            ));
        };

        let cells = boards::board_cells(conn, game.game_id, board.board_id).await?;
        Ok(BoardView {
            game,
            user_id,
            board_id: board.board_id,
            cells,
        })
    }
}

impl Default for GameService {
    fn default() -> Self {
        Self::new()
    }
}
