use std::collections::HashSet;

use bingo_backend::config::game::GameRules;
use bingo_backend::db::require_db;
use bingo_backend::entities::EventStatus;
use bingo_backend::errors::domain::{DomainError, ForbiddenKind};
use bingo_backend::services::games::GameService;
use bingo_backend::services::votes::VoteService;

use crate::support::factory::{create_game_with, create_request};
use crate::support::test_state::build_test_state;

#[tokio::test]
async fn board_view_is_row_major_with_distinct_events() -> Result<(), Box<dyn std::error::Error>>
{
    let state = build_test_state().await?;
    create_game_with(&state, create_request("Board", 3, &[1, 2], 20)).await?;
    let db = require_db(&state)?;

    let view = GameService::new().view_board(db, None, 2).await?;
    assert_eq!(view.user_id, 2);
    assert_eq!(view.cells.len(), 9);

    let positions: Vec<(i32, i32)> = view.cells.iter().map(|c| (c.row, c.column)).collect();
    let expected: Vec<(i32, i32)> = (0..3).flat_map(|r| (0..3).map(move |c| (r, c))).collect();
    assert_eq!(positions, expected);

    let distinct: HashSet<i64> = view.cells.iter().map(|c| c.event_id).collect();
    assert_eq!(distinct.len(), 9);
    assert!(view.cells.iter().all(|c| (1..=20).contains(&c.event_id)));
    assert!(view.cells.iter().all(|c| !c.closed));

    let rows = view.rows();
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|row| row.len() == 3));
    Ok(())
}

#[tokio::test]
async fn board_view_marks_closed_squares() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    create_game_with(&state, create_request("Marks", 2, &[1], 4)).await?;
    let db = require_db(&state)?;

    VoteService::new(GameRules::default())
        .cast_vote(db, None, 3, 1)
        .await?;

    let view = GameService::new().view_board(db, None, 1).await?;
    for cell in &view.cells {
        assert_eq!(cell.closed, cell.event_id == 3, "cell {cell:?}");
    }
    Ok(())
}

#[tokio::test]
async fn board_of_non_player_is_forbidden() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    create_game_with(&state, create_request("Private", 2, &[1], 4)).await?;
    let db = require_db(&state)?;

    let err = GameService::new().view_board(db, None, 9).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Forbidden(ForbiddenKind::NotAPlayer, _)
    ));
    Ok(())
}

#[tokio::test]
async fn events_are_listed_in_file_order() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    create_game_with(&state, create_request("List", 2, &[1], 6)).await?;
    let db = require_db(&state)?;

    VoteService::new(GameRules::default())
        .cast_vote(db, None, 4, 1)
        .await?;

    let listing = GameService::new().list_events(db, None).await?;
    let ids: Vec<i64> = listing.events.iter().map(|e| e.event_id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(listing.events[0].description, "Event 1");
    assert_eq!(listing.events[3].status, EventStatus::Closed);
    assert_eq!(listing.events[4].status, EventStatus::Open);
    Ok(())
}

#[tokio::test]
async fn listing_reports_progress_newest_first() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let first = create_game_with(&state, create_request("First", 2, &[1, 2], 5)).await?;
    let second = create_game_with(&state, create_request("Second", 2, &[1], 4)).await?;
    let db = require_db(&state)?;

    let service = VoteService::new(GameRules::default());
    service.cast_vote(db, None, 1, 1).await?;
    service.cast_vote(db, None, 1, 2).await?;
    service.cast_vote(db, None, 2, 1).await?;

    let listing = GameService::new().list_games(db).await?;
    assert_eq!(listing.len(), 2);

    assert_eq!(listing[0].game.game_id, second.game.game_id);
    assert_eq!(listing[0].event_count, 4);
    assert_eq!(listing[0].closed_count, 0);
    assert_eq!(listing[0].player_count, 1);

    assert_eq!(listing[1].game.game_id, first.game.game_id);
    assert!(listing[1].game.is_active);
    assert_eq!(listing[1].event_count, 5);
    assert_eq!(listing[1].closed_count, 1);
    assert_eq!(listing[1].player_count, 2);
    Ok(())
}
