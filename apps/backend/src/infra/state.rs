use crate::config::db::DbSettings;
use crate::config::game::GameRules;
use crate::error::AppError;
use crate::infra::db::bootstrap_db;
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    rules: GameRules,
    db_settings: Option<DbSettings>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            rules: GameRules::default(),
            db_settings: None,
        }
    }

    pub fn with_db(mut self, settings: DbSettings) -> Self {
        self.db_settings = Some(settings);
        self
    }

    pub fn with_rules(mut self, rules: GameRules) -> Self {
        self.rules = rules;
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        self.rules.validate()?;
        match self.db_settings {
            Some(settings) => {
                let conn = bootstrap_db(&settings).await?;
                Ok(AppState::new(conn, self.rules))
            }
            None => Ok(AppState::without_db(self.rules)),
        }
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
