use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::problem_details::assert_problem_details;
use bingo_backend::extractors::caller::USER_HEADER;
use bingo_backend::routes::games::VoteResponse;
use serde_json::json;

use crate::common::read_json;
use crate::support::app_builder::create_test_app;
use crate::support::factory::{create_full_cover_game, create_game_with, create_request};
use crate::support::test_state::build_test_state;

fn vote(user: i64, body: serde_json::Value) -> actix_http::Request {
    test::TestRequest::post()
        .uri("/api/games/votes")
        .insert_header((USER_HEADER, user.to_string()))
        .set_json(body)
        .to_request()
}

#[actix_web::test]
async fn votes_close_event_and_report_winner() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    create_full_cover_game(&state, "Pair", 2, &[1, 2]).await?;
    let app = create_test_app(state).build().await;

    for event_id in 1..=4 {
        let resp = test::call_service(&app, vote(1, json!({ "event_id": event_id }))).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let first: VoteResponse = read_json(resp).await;
        assert_eq!(first.threshold, 2);
        assert!(!first.closed);

        let resp = test::call_service(&app, vote(2, json!({ "event_id": event_id }))).await;
        let second: VoteResponse = read_json(resp).await;
        assert!(second.closed);
        assert_eq!(second.description, format!("Event {event_id}"));

        if event_id < 4 {
            assert!(second.winners.is_empty());
        } else {
            assert_eq!(second.winners, vec![1, 2]);
        }
    }
    Ok(())
}

#[actix_web::test]
async fn vote_errors_are_problem_details() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    create_game_with(&state, create_request("Errors", 2, &[1, 2], 4)).await?;
    let app = create_test_app(state).build().await;

    let resp = test::call_service(&app, vote(1, json!({ "event_id": 1 }))).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = test::call_service(&app, vote(1, json!({ "event_id": 1 }))).await;
    assert_problem_details(resp, "DUPLICATE_VOTE", StatusCode::CONFLICT, None).await;

    let resp = test::call_service(&app, vote(3, json!({ "event_id": 1 }))).await;
    assert_problem_details(
        resp,
        "NOT_A_PLAYER",
        StatusCode::FORBIDDEN,
        Some("User 3"),
    )
    .await;

    let resp = test::call_service(&app, vote(1, json!({ "event_id": 9 }))).await;
    assert_problem_details(resp, "EVENT_NOT_FOUND", StatusCode::NOT_FOUND, None).await;

    let resp = test::call_service(&app, vote(2, json!({ "event_id": 1 }))).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let resp = test::call_service(&app, vote(2, json!({ "event_id": 1 }))).await;
    assert_problem_details(resp, "EVENT_ALREADY_CLOSED", StatusCode::CONFLICT, None).await;
    Ok(())
}

#[actix_web::test]
async fn vote_with_bad_game_id() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    create_game_with(&state, create_request("Ids", 2, &[1], 4)).await?;
    let app = create_test_app(state).build().await;

    let resp = test::call_service(&app, vote(1, json!({ "event_id": 1, "game_id": 0 }))).await;
    assert_problem_details(resp, "INVALID_GAME_ID", StatusCode::BAD_REQUEST, None).await;

    let resp = test::call_service(&app, vote(1, json!({ "event_id": 1, "game_id": 55 }))).await;
    assert_problem_details(resp, "GAME_NOT_FOUND", StatusCode::NOT_FOUND, None).await;
    Ok(())
}
