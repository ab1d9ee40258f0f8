//! SeaORM adapter for boards and their squares.

use sea_orm::sea_query::Query;
use sea_orm::{
    ActiveEnum, ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, FromQueryResult,
    NotSet, PaginatorTrait, QueryFilter, QueryOrder, Set, Statement, Value,
};

use crate::entities::{board_squares, boards, EventStatus};

pub mod dto;

pub use dto::{BoardCellRow, BoardProgressRow, SquareCreate};

pub async fn create_board<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    user_id: i64,
    grid_size: i32,
) -> Result<boards::Model, sea_orm::DbErr> {
    let board = boards::ActiveModel {
        board_id: NotSet,
        game_id: Set(game_id),
        user_id: Set(user_id),
        grid_size: Set(grid_size),
    };
    board.insert(conn).await
}

pub async fn insert_squares<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    board_id: i64,
    squares: &[SquareCreate],
) -> Result<u64, sea_orm::DbErr> {
    if squares.is_empty() {
        return Ok(0);
    }

    let models = squares.iter().map(|sq| board_squares::ActiveModel {
        board_id: Set(board_id),
        row_no: Set(sq.row),
        col_no: Set(sq.column),
        event_id: Set(sq.event_id),
    });

    board_squares::Entity::insert_many(models)
        .exec_without_returning(conn)
        .await
}

pub async fn find_for_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    user_id: i64,
) -> Result<Option<boards::Model>, sea_orm::DbErr> {
    boards::Entity::find()
        .filter(boards::Column::GameId.eq(game_id))
        .filter(boards::Column::UserId.eq(user_id))
        .one(conn)
        .await
}

pub async fn list_for_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<boards::Model>, sea_orm::DbErr> {
    boards::Entity::find()
        .filter(boards::Column::GameId.eq(game_id))
        .order_by_asc(boards::Column::BoardId)
        .all(conn)
        .await
}

pub async fn count_for_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    boards::Entity::find()
        .filter(boards::Column::GameId.eq(game_id))
        .count(conn)
        .await
}

/// Cells of one board with event text and closed flag, row-major.
pub async fn cells<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    board_id: i64,
) -> Result<Vec<BoardCellRow>, sea_orm::DbErr> {
    let sql = r#"
        SELECT bs."row" AS row_no, bs."column" AS col_no, bs.event_id,
               e.description, (e.status = ?) AS closed
        FROM board_squares bs
        JOIN events e ON e.event_id = bs.event_id AND e.game_id = ?
        WHERE bs.board_id = ?
        ORDER BY bs."row", bs."column"
    "#;

    BoardCellRow::find_by_statement(Statement::from_sql_and_values(
        conn.get_database_backend(),
        sql,
        [
            Value::from(EventStatus::Closed.to_value()),
            Value::from(game_id),
            Value::from(board_id),
        ],
    ))
    .all(conn)
    .await
}

/// Closed squares per board in a game, ordered by board id.
pub async fn closed_counts<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<BoardProgressRow>, sea_orm::DbErr> {
    let sql = r#"
        SELECT b.board_id, b.user_id, COUNT(e.event_id) AS closed_count
        FROM boards b
        LEFT JOIN board_squares bs ON bs.board_id = b.board_id
        LEFT JOIN events e
               ON e.event_id = bs.event_id
              AND e.game_id = b.game_id
              AND e.status = ?
        WHERE b.game_id = ?
        GROUP BY b.board_id, b.user_id
        ORDER BY b.board_id
    "#;

    BoardProgressRow::find_by_statement(Statement::from_sql_and_values(
        conn.get_database_backend(),
        sql,
        [
            Value::from(EventStatus::Closed.to_value()),
            Value::from(game_id),
        ],
    ))
    .all(conn)
    .await
}

/// Delete every board of a game together with its squares.
pub async fn delete_for_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let game_boards = Query::select()
        .column(boards::Column::BoardId)
        .from(boards::Entity)
        .and_where(boards::Column::GameId.eq(game_id))
        .to_owned();

    board_squares::Entity::delete_many()
        .filter(board_squares::Column::BoardId.in_subquery(game_boards))
        .exec(conn)
        .await?;

    let result = boards::Entity::delete_many()
        .filter(boards::Column::GameId.eq(game_id))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}
