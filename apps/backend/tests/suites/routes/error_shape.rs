use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::problem_details::assert_problem_details;
use bingo_backend::config::game::GameRules;
use bingo_backend::extractors::caller::USER_HEADER;
use bingo_backend::state::app_state::AppState;

use crate::support::app_builder::create_test_app;
use crate::support::test_state::build_test_state;

#[actix_web::test]
async fn missing_caller_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(build_test_state().await?).build().await;

    let req = test::TestRequest::post()
        .uri("/api/games/votes")
        .set_json(serde_json::json!({ "event_id": 1 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let problem =
        assert_problem_details(resp, "INVALID_CALLER", StatusCode::BAD_REQUEST, None).await;
    assert!(problem.type_.ends_with("/INVALID_CALLER"));
    Ok(())
}

#[actix_web::test]
async fn non_numeric_caller_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(build_test_state().await?).build().await;

    let req = test::TestRequest::delete()
        .uri("/api/games/1")
        .insert_header((USER_HEADER, "someone"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(
        resp,
        "INVALID_CALLER",
        StatusCode::BAD_REQUEST,
        Some(USER_HEADER),
    )
    .await;
    Ok(())
}

#[actix_web::test]
async fn malformed_json_is_bad_request() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(build_test_state().await?).build().await;

    let req = test::TestRequest::post()
        .uri("/api/games")
        .insert_header((USER_HEADER, "1"))
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"title\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(resp, "BAD_REQUEST", StatusCode::BAD_REQUEST, None).await;
    Ok(())
}

#[actix_web::test]
async fn non_positive_path_id_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(build_test_state().await?).build().await;

    let req = test::TestRequest::post()
        .uri("/api/games/-3/activate")
        .insert_header((USER_HEADER, "1"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(resp, "INVALID_GAME_ID", StatusCode::BAD_REQUEST, None).await;
    Ok(())
}

#[actix_web::test]
async fn missing_database_is_unavailable() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(AppState::without_db(GameRules::default()))
        .build()
        .await;

    let req = test::TestRequest::get().uri("/api/games").to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(resp, "DB_UNAVAILABLE", StatusCode::SERVICE_UNAVAILABLE, None).await;
    Ok(())
}

#[actix_web::test]
async fn each_request_gets_its_own_trace_id() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(build_test_state().await?).build().await;

    let mut seen = Vec::new();
    for _ in 0..2 {
        let req = test::TestRequest::get().uri("/api/games/events").to_request();
        let resp = test::call_service(&app, req).await;
        let problem =
            assert_problem_details(resp, "NO_ACTIVE_GAME", StatusCode::NOT_FOUND, None).await;
        assert_ne!(problem.trace_id, "unknown");
        seen.push(problem.trace_id);
    }
    assert_ne!(seen[0], seen[1]);
    Ok(())
}
