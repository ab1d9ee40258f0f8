//! Bingo command routes called by the chat layer.

use actix_web::{web, HttpResponse, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::db::require_db;
use crate::db::txn::with_txn;
use crate::entities::EventStatus;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::caller::Caller;
use crate::extractors::game_id::GameId;
use crate::repos::boards::BoardCell;
use crate::repos::events::Event;
use crate::repos::games::{Game, GameSummary};
use crate::services::games::{CreateGame, GameService};
use crate::services::votes::{VoteOutcome, VoteService};
use crate::state::app_state::AppState;

const DEFAULT_GRID_SIZE: i64 = 4;

fn default_grid_size() -> i64 {
    DEFAULT_GRID_SIZE
}

#[derive(Debug, Deserialize)]
pub struct CreateGameRequest {
    pub title: String,
    #[serde(default = "default_grid_size")]
    pub grid_size: i64,
    pub player_ids: Vec<i64>,
    pub events_csv: String,
}

#[derive(Debug, Deserialize)]
pub struct VoteRequest {
    pub event_id: i64,
    #[serde(default)]
    pub game_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct GameQuery {
    pub game_id: Option<i64>,
}

impl GameQuery {
    fn game_id(&self) -> Result<Option<i64>, AppError> {
        match self.game_id {
            Some(id) if id <= 0 => Err(AppError::bad_request(
                ErrorCode::InvalidGameId,
                format!("Game id must be positive, got: {id}"),
            )),
            other => Ok(other),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameResponse {
    pub game_id: i64,
    pub title: String,
    pub is_active: bool,
    pub grid_size: u8,
}

impl From<Game> for GameResponse {
    fn from(game: Game) -> Self {
        Self {
            game_id: game.game_id,
            title: game.title,
            is_active: game.is_active,
            grid_size: game.grid_size,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GameSummaryResponse {
    #[serde(flatten)]
    pub game: GameResponse,
    pub event_count: u64,
    pub closed_count: u64,
    pub player_count: u64,
}

impl From<GameSummary> for GameSummaryResponse {
    fn from(summary: GameSummary) -> Self {
        Self {
            game: summary.game.into(),
            event_count: summary.event_count,
            closed_count: summary.closed_count,
            player_count: summary.player_count,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreatedGameResponse {
    pub game: GameResponse,
    pub event_count: usize,
    pub player_ids: Vec<i64>,
    pub activated: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeletedGameResponse {
    pub deleted: GameResponse,
    pub promoted: Option<GameResponse>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EventResponse {
    pub event_id: i64,
    pub description: String,
    pub status: EventStatus,
}

impl From<Event> for EventResponse {
    fn from(event: Event) -> Self {
        Self {
            event_id: event.event_id,
            description: event.description,
            status: event.status,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EventsResponse {
    pub game: GameResponse,
    pub events: Vec<EventResponse>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct VoteResponse {
    pub game_id: i64,
    pub event_id: i64,
    pub description: String,
    pub votes: u64,
    pub threshold: u64,
    pub player_count: u64,
    pub closed: bool,
    pub winners: Vec<i64>,
}

impl From<VoteOutcome> for VoteResponse {
    fn from(o: VoteOutcome) -> Self {
        Self {
            game_id: o.game_id,
            event_id: o.event_id,
            description: o.description,
            votes: o.votes,
            threshold: o.threshold,
            player_count: o.player_count,
            closed: o.closed,
            winners: o.winners,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CellResponse {
    pub row: i32,
    pub column: i32,
    pub event_id: i64,
    pub description: String,
    pub status: EventStatus,
}

impl From<&BoardCell> for CellResponse {
    fn from(cell: &BoardCell) -> Self {
        Self {
            row: cell.row,
            column: cell.column,
            event_id: cell.event_id,
            description: cell.description.clone(),
            status: if cell.closed {
                EventStatus::Closed
            } else {
                EventStatus::Open
            },
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BoardResponse {
    pub game: GameResponse,
    pub user_id: i64,
    pub board_id: i64,
    pub rows: Vec<Vec<CellResponse>>,
}

/// GET /api/games
async fn list_games(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let games = GameService::new().list_games(db).await?;
    let body: Vec<GameSummaryResponse> = games.into_iter().map(Into::into).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// POST /api/games
async fn create_game(
    caller: Caller,
    body: web::Json<CreateGameRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let req = CreateGame {
        title: body.title,
        grid_size: body.grid_size,
        player_ids: body.player_ids,
        events_csv: body.events_csv,
    };

    let created = with_txn(&app_state, |txn| {
        Box::pin(async move {
            let mut rng = StdRng::from_os_rng();
            Ok(GameService::new().create_game(txn, &mut rng, req).await?)
        })
    })
    .await?;

    info!(
        game_id = created.game.game_id,
        created_by = caller.user_id,
        "create command handled"
    );

    Ok(HttpResponse::Created().json(CreatedGameResponse {
        game: created.game.into(),
        event_count: created.event_count,
        player_ids: created.player_ids,
        activated: created.activated,
    }))
}

/// DELETE /api/games/{game_id}
async fn delete_game(
    caller: Caller,
    game_id: GameId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = game_id.0;
    let deleted = with_txn(&app_state, |txn| {
        Box::pin(async move { Ok(GameService::new().delete_game(txn, id).await?) })
    })
    .await?;

    info!(game_id = id, deleted_by = caller.user_id, "delete command handled");

    Ok(HttpResponse::Ok().json(DeletedGameResponse {
        deleted: deleted.game.into(),
        promoted: deleted.promoted.map(Into::into),
    }))
}

/// POST /api/games/{game_id}/activate
async fn activate_game(
    caller: Caller,
    game_id: GameId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = game_id.0;
    let game = with_txn(&app_state, |txn| {
        Box::pin(async move { Ok(GameService::new().set_active_game(txn, id).await?) })
    })
    .await?;

    info!(game_id = id, activated_by = caller.user_id, "activate command handled");

    Ok(HttpResponse::Ok().json(GameResponse::from(game)))
}

/// GET /api/games/events?game_id=
async fn list_events(
    query: web::Query<GameQuery>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let listing = GameService::new()
        .list_events(db, query.game_id()?)
        .await?;

    Ok(HttpResponse::Ok().json(EventsResponse {
        game: listing.game.into(),
        events: listing.events.into_iter().map(Into::into).collect(),
    }))
}

/// POST /api/games/votes
async fn cast_vote(
    caller: Caller,
    body: web::Json<VoteRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let game_id = GameQuery {
        game_id: body.game_id,
    }
    .game_id()?;

    let db = require_db(&app_state)?;
    let _writes = app_state.lock_writes().await;
    let outcome = VoteService::new(app_state.rules)
        .cast_vote(db, game_id, body.event_id, caller.user_id)
        .await?;

    Ok(HttpResponse::Ok().json(VoteResponse::from(outcome)))
}

/// GET /api/games/boards/{user_id}?game_id=
async fn view_board(
    path: web::Path<i64>,
    query: web::Query<GameQuery>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let user_id = path.into_inner();
    let db = require_db(&app_state)?;
    let view = GameService::new()
        .view_board(db, query.game_id()?, user_id)
        .await?;

    let rows = view
        .rows()
        .into_iter()
        .map(|row| row.iter().map(CellResponse::from).collect())
        .collect();

    Ok(HttpResponse::Ok().json(BoardResponse {
        game: view.game.into(),
        user_id: view.user_id,
        board_id: view.board_id,
        rows,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        AppError::bad_request(ErrorCode::BadRequest, err.to_string()).into()
    }))
    .app_data(web::QueryConfig::default().error_handler(|err, _req| {
        AppError::bad_request(ErrorCode::BadRequest, err.to_string()).into()
    }));

    // Static segments before `{game_id}` so they are not captured by it.
    cfg.service(
        web::resource("")
            .route(web::get().to(list_games))
            .route(web::post().to(create_game)),
    );
    cfg.service(web::resource("/events").route(web::get().to(list_events)));
    cfg.service(web::resource("/votes").route(web::post().to(cast_vote)));
    cfg.service(web::resource("/boards/{user_id}").route(web::get().to(view_board)));
    cfg.service(web::resource("/{game_id}").route(web::delete().to(delete_game)));
    cfg.service(web::resource("/{game_id}/activate").route(web::post().to(activate_game)));
}
