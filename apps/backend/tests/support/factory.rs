use bingo_backend::db::txn::with_txn;
use bingo_backend::services::games::{CreateGame, CreatedGame, GameService};
use bingo_backend::state::app_state::AppState;
use bingo_backend::AppError;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub const SEED: u64 = 0x5EED_B1A6;

/// `count` newline-separated event descriptions, "Event 1".."Event N".
pub fn events_csv(count: usize) -> String {
    (1..=count)
        .map(|n| format!("Event {n}\n"))
        .collect::<String>()
}

pub fn create_request(title: &str, grid_size: i64, players: &[i64], events: usize) -> CreateGame {
    CreateGame {
        title: title.to_string(),
        grid_size,
        player_ids: players.to_vec(),
        events_csv: events_csv(events),
    }
}

/// Create a game through the service in its own committed transaction.
pub async fn create_game_with(state: &AppState, req: CreateGame) -> Result<CreatedGame, AppError> {
    with_txn(state, |txn| {
        Box::pin(async move {
            let mut rng = StdRng::seed_from_u64(SEED);
            Ok(GameService::new().create_game(txn, &mut rng, req).await?)
        })
    })
    .await
}

/// A game whose boards hold exactly its events: `grid_size²` events, so
/// every board covers every event.
pub async fn create_full_cover_game(
    state: &AppState,
    title: &str,
    grid_size: u8,
    players: &[i64],
) -> Result<CreatedGame, AppError> {
    let cells = usize::from(grid_size) * usize::from(grid_size);
    create_game_with(
        state,
        create_request(title, i64::from(grid_size), players, cells),
    )
    .await
}
