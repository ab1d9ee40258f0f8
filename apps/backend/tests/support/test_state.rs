use bingo_backend::config::db::DbSettings;
use bingo_backend::config::game::GameRules;
use bingo_backend::infra::state::{build_state, StateBuilder};
use bingo_backend::state::app_state::AppState;
use bingo_backend::AppError;

/// Fresh, migrated in-memory database per call.
pub fn test_state_builder() -> StateBuilder {
    build_state().with_db(DbSettings::in_memory())
}

pub async fn build_test_state() -> Result<AppState, AppError> {
    test_state_builder().build().await
}

pub async fn build_test_state_with_rules(rules: GameRules) -> Result<AppState, AppError> {
    test_state_builder().with_rules(rules).build().await
}
