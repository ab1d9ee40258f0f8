//! DTOs for games_sea adapter.

/// DTO for inserting a new game row.
#[derive(Debug, Clone)]
pub struct GameCreate {
    pub title: String,
    pub grid_size: i32,
    pub is_active: bool,
}

impl GameCreate {
    pub fn new(title: impl Into<String>, grid_size: i32) -> Self {
        Self {
            title: title.into(),
            grid_size,
            is_active: false,
        }
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }
}

/// Aggregated counts for one game, read in a single query.
#[derive(Debug, Clone, PartialEq, Eq, sea_orm::FromQueryResult)]
pub struct GameStatsRow {
    pub game_id: i64,
    pub title: String,
    pub grid_size: i32,
    pub is_active: bool,
    pub event_count: i64,
    pub closed_count: i64,
    pub player_count: i64,
}
