use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::problem_details::assert_problem_details;
use bingo_backend::extractors::caller::USER_HEADER;
use bingo_backend::routes::games::{
    BoardResponse, CreatedGameResponse, DeletedGameResponse, EventsResponse, GameResponse,
    GameSummaryResponse,
};
use serde_json::json;

use crate::common::read_json;
use crate::support::app_builder::create_test_app;
use crate::support::factory::events_csv;
use crate::support::test_state::build_test_state;

fn create_body(title: &str, grid_size: i64, players: &[i64], events: usize) -> serde_json::Value {
    json!({
        "title": title,
        "grid_size": grid_size,
        "player_ids": players,
        "events_csv": events_csv(events),
    })
}

#[actix_web::test]
async fn create_then_list() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(build_test_state().await?).build().await;

    let req = test::TestRequest::post()
        .uri("/api/games")
        .insert_header((USER_HEADER, "1"))
        .set_json(create_body("Derby", 2, &[1, 2], 6))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let created: CreatedGameResponse = read_json(resp).await;
    assert!(created.activated);
    assert_eq!(created.event_count, 6);
    assert_eq!(created.player_ids, vec![1, 2]);
    assert_eq!(created.game.title, "Derby");

    let req = test::TestRequest::get().uri("/api/games").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let listing: Vec<GameSummaryResponse> = read_json(resp).await;
    assert_eq!(listing.len(), 1);
    assert_eq!(listing[0].game, created.game);
    assert_eq!(listing[0].event_count, 6);
    assert_eq!(listing[0].player_count, 2);
    assert_eq!(listing[0].closed_count, 0);
    Ok(())
}

#[actix_web::test]
async fn grid_size_defaults_to_four() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(build_test_state().await?).build().await;

    let req = test::TestRequest::post()
        .uri("/api/games")
        .insert_header((USER_HEADER, "1"))
        .set_json(json!({
            "title": "Default grid",
            "player_ids": [1],
            "events_csv": events_csv(16),
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let created: CreatedGameResponse = read_json(resp).await;
    assert_eq!(created.game.grid_size, 4);
    Ok(())
}

#[actix_web::test]
async fn create_rejects_bad_grid_and_short_files() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(build_test_state().await?).build().await;

    let req = test::TestRequest::post()
        .uri("/api/games")
        .insert_header((USER_HEADER, "1"))
        .set_json(create_body("Huge", 11, &[1], 200))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(
        resp,
        "INVALID_GRID_SIZE",
        StatusCode::UNPROCESSABLE_ENTITY,
        Some("between 2 and 10"),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/games")
        .insert_header((USER_HEADER, "1"))
        .set_json(create_body("Short", 3, &[1], 5))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(
        resp,
        "INSUFFICIENT_EVENTS",
        StatusCode::UNPROCESSABLE_ENTITY,
        Some("at least 9 events"),
    )
    .await;
    Ok(())
}

#[actix_web::test]
async fn events_and_board_views() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(build_test_state().await?).build().await;

    let req = test::TestRequest::post()
        .uri("/api/games")
        .insert_header((USER_HEADER, "1"))
        .set_json(create_body("Views", 2, &[1], 5))
        .to_request();
    let created: CreatedGameResponse = read_json(test::call_service(&app, req).await).await;

    let req = test::TestRequest::get().uri("/api/games/events").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let events: EventsResponse = read_json(resp).await;
    assert_eq!(events.game.game_id, created.game.game_id);
    assert_eq!(events.events.len(), 5);
    assert_eq!(events.events[0].description, "Event 1");

    let uri = format!("/api/games/boards/1?game_id={}", created.game.game_id);
    let req = test::TestRequest::get().uri(&uri).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let board: BoardResponse = read_json(resp).await;
    assert_eq!(board.user_id, 1);
    assert_eq!(board.rows.len(), 2);
    assert!(board.rows.iter().all(|row| row.len() == 2));
    assert_eq!(board.rows[1][0].row, 1);
    assert_eq!(board.rows[1][0].column, 0);

    let req = test::TestRequest::get()
        .uri("/api/games/boards/2")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(resp, "NOT_A_PLAYER", StatusCode::FORBIDDEN, None).await;
    Ok(())
}

#[actix_web::test]
async fn activate_and_delete() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(build_test_state().await?).build().await;

    let mut ids = Vec::new();
    for title in ["One", "Two"] {
        let req = test::TestRequest::post()
            .uri("/api/games")
            .insert_header((USER_HEADER, "1"))
            .set_json(create_body(title, 2, &[1], 4))
            .to_request();
        let created: CreatedGameResponse = read_json(test::call_service(&app, req).await).await;
        ids.push(created.game.game_id);
    }

    let req = test::TestRequest::post()
        .uri(&format!("/api/games/{}/activate", ids[1]))
        .insert_header((USER_HEADER, "1"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let active: GameResponse = read_json(resp).await;
    assert_eq!(active.game_id, ids[1]);
    assert!(active.is_active);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/games/{}", ids[1]))
        .insert_header((USER_HEADER, "1"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let deleted: DeletedGameResponse = read_json(resp).await;
    assert_eq!(deleted.deleted.game_id, ids[1]);
    assert_eq!(deleted.promoted.map(|g| g.game_id), Some(ids[0]));

    let req = test::TestRequest::delete()
        .uri(&format!("/api/games/{}", ids[1]))
        .insert_header((USER_HEADER, "1"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(resp, "GAME_NOT_FOUND", StatusCode::NOT_FOUND, None).await;
    Ok(())
}

#[actix_web::test]
async fn no_active_game_is_reported() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(build_test_state().await?).build().await;

    let req = test::TestRequest::get().uri("/api/games/events").to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(resp, "NO_ACTIVE_GAME", StatusCode::NOT_FOUND, None).await;
    Ok(())
}
