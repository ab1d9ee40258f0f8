//! Board repository functions.

use sea_orm::ConnectionTrait;

use crate::adapters::boards_sea::{self, SquareCreate};
use crate::domain::board::SquarePlacement;
use crate::entities::boards;
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub board_id: i64,
    pub game_id: i64,
    pub user_id: i64,
    pub grid_size: i32,
}

impl From<boards::Model> for Board {
    fn from(model: boards::Model) -> Self {
        Self {
            board_id: model.board_id,
            game_id: model.game_id,
            user_id: model.user_id,
            grid_size: model.grid_size,
        }
    }
}

/// One rendered cell of a player's board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardCell {
    pub row: i32,
    pub column: i32,
    pub event_id: i64,
    pub description: String,
    pub closed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardProgress {
    pub board_id: i64,
    pub user_id: i64,
    pub closed: u64,
}

/// Create a board for `user_id`; a second board in the same game maps to
/// `DuplicateBoard`.
pub async fn create_board<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    user_id: i64,
    grid_size: u8,
) -> Result<Board, DomainError> {
    let board = boards_sea::create_board(conn, game_id, user_id, i32::from(grid_size)).await?;
    Ok(Board::from(board))
}

pub async fn insert_squares<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    board_id: i64,
    placements: &[SquarePlacement],
) -> Result<(), DomainError> {
    let squares: Vec<SquareCreate> = placements
        .iter()
        .map(|p| SquareCreate {
            row: i32::from(p.row),
            column: i32::from(p.column),
            event_id: p.event_id,
        })
        .collect();
    boards_sea::insert_squares(conn, board_id, &squares).await?;
    Ok(())
}

pub async fn find_board<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    user_id: i64,
) -> Result<Option<Board>, DomainError> {
    Ok(boards_sea::find_for_user(conn, game_id, user_id)
        .await?
        .map(Board::from))
}

pub async fn list_boards<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<Board>, DomainError> {
    let boards = boards_sea::list_for_game(conn, game_id).await?;
    Ok(boards.into_iter().map(Board::from).collect())
}

/// Number of boards in the game, which is also its player count.
pub async fn count_boards<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<u64, DomainError> {
    Ok(boards_sea::count_for_game(conn, game_id).await?)
}

pub async fn board_cells<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    board_id: i64,
) -> Result<Vec<BoardCell>, DomainError> {
    let rows = boards_sea::cells(conn, game_id, board_id).await?;
    Ok(rows
        .into_iter()
        .map(|row| BoardCell {
            row: row.row_no,
            column: row.col_no,
            event_id: row.event_id,
            description: row.description,
            closed: row.closed,
        })
        .collect())
}

pub async fn closed_counts<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<BoardProgress>, DomainError> {
    let rows = boards_sea::closed_counts(conn, game_id).await?;
    Ok(rows
        .into_iter()
        .map(|row| BoardProgress {
            board_id: row.board_id,
            user_id: row.user_id,
            closed: row.closed_count.max(0) as u64,
        })
        .collect())
}
