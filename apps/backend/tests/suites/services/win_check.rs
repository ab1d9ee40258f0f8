use bingo_backend::config::game::GameRules;
use bingo_backend::db::require_db;
use bingo_backend::repos::{boards, events};
use bingo_backend::services::votes::VoteService;
use bingo_backend::services::win_check::check_for_winners;

use crate::support::factory::{create_full_cover_game, create_game_with, create_request};
use crate::support::test_state::build_test_state;

#[tokio::test]
async fn closing_last_square_reports_every_full_board() -> Result<(), Box<dyn std::error::Error>>
{
    let state = build_test_state().await?;
    let created = create_full_cover_game(&state, "Blackout", 2, &[30, 10, 20]).await?;
    let db = require_db(&state)?;
    let service = VoteService::new(GameRules::default());

    for event_id in 1..=3 {
        for user in [30, 10, 20] {
            let outcome = service.cast_vote(db, None, event_id, user).await?;
            assert!(outcome.winners.is_empty());
        }
    }

    service.cast_vote(db, None, 4, 30).await?;
    service.cast_vote(db, None, 4, 10).await?;
    let last = service.cast_vote(db, None, 4, 20).await?;

    assert!(last.closed);
    // Boards were created in player order, so board order is 30, 10, 20.
    assert_eq!(last.winners, vec![30, 10, 20]);

    let again = check_for_winners(db, created.game.game_id, 2).await?;
    assert_eq!(again, vec![30, 10, 20]);
    Ok(())
}

#[tokio::test]
async fn only_full_boards_win() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let created = create_game_with(&state, create_request("Solo", 2, &[5], 5)).await?;
    let game_id = created.game.game_id;
    let db = require_db(&state)?;
    let service = VoteService::new(GameRules::default());

    let board = boards::find_board(db, game_id, 5).await?.expect("board");
    let cells = boards::board_cells(db, game_id, board.board_id).await?;
    let on_board: Vec<i64> = cells.iter().map(|c| c.event_id).collect();
    let off_board = (1..=5)
        .find(|id| !on_board.contains(id))
        .expect("one event is not on a 2x2 board");

    let outcome = service.cast_vote(db, None, off_board, 5).await?;
    assert!(outcome.closed);
    assert!(outcome.winners.is_empty());

    let (last, rest) = on_board.split_last().expect("four cells");
    for event_id in rest {
        let outcome = service.cast_vote(db, None, *event_id, 5).await?;
        assert!(outcome.winners.is_empty());
    }

    let outcome = service.cast_vote(db, None, *last, 5).await?;
    assert_eq!(outcome.winners, vec![5]);
    Ok(())
}

#[tokio::test]
async fn no_winners_while_squares_are_open() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let created = create_full_cover_game(&state, "Open", 3, &[1, 2]).await?;
    let game_id = created.game.game_id;
    let db = require_db(&state)?;

    for event_id in 1..=8 {
        events::close_event(db, game_id, event_id).await?;
    }

    assert!(check_for_winners(db, game_id, 3).await?.is_empty());

    events::close_event(db, game_id, 9).await?;
    assert_eq!(check_for_winners(db, game_id, 3).await?, vec![1, 2]);
    Ok(())
}
