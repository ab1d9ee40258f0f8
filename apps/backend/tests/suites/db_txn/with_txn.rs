use bingo_backend::db::require_db;
use bingo_backend::db::txn::with_txn;
use bingo_backend::repos::games;
use bingo_backend::{AppError, ErrorCode};

use crate::support::test_state::build_test_state;

#[tokio::test]
async fn ok_commits() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;

    let game = with_txn(&state, |txn| {
        Box::pin(async move { Ok(games::create_game(txn, "Kept", 2, true).await?) })
    })
    .await?;

    let db = require_db(&state)?;
    assert!(games::find_game(db, game.game_id).await?.is_some());
    Ok(())
}

#[tokio::test]
async fn err_rolls_back_and_keeps_error() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;

    let result: Result<(), AppError> = with_txn(&state, |txn| {
        Box::pin(async move {
            games::create_game(txn, "Dropped", 2, true).await?;
            Err(AppError::conflict(ErrorCode::Conflict, "abort on purpose"))
        })
    })
    .await;

    let err = result.unwrap_err();
    assert_eq!(err.code(), ErrorCode::Conflict);

    let db = require_db(&state)?;
    assert!(games::list_games_with_stats(db).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn without_db_is_unavailable() {
    let state = bingo_backend::AppState::without_db(Default::default());

    let err = with_txn(&state, |_txn| Box::pin(async move { Ok(()) }))
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::DbUnavailable);
}
