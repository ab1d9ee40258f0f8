//! DTOs for boards_sea adapter.

use sea_orm::FromQueryResult;

/// One square of a freshly generated board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SquareCreate {
    pub row: i32,
    pub column: i32,
    pub event_id: i64,
}

/// A square joined with its event, in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct BoardCellRow {
    pub row_no: i32,
    pub col_no: i32,
    pub event_id: i64,
    pub description: String,
    pub closed: bool,
}

/// Closed-square tally for one board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromQueryResult)]
pub struct BoardProgressRow {
    pub board_id: i64,
    pub user_id: i64,
    pub closed_count: i64,
}
