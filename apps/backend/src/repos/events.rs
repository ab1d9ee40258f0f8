//! Event repository functions.

use sea_orm::ConnectionTrait;

use crate::adapters::events_sea::{self, EventCreate};
use crate::entities::{events, EventStatus};
use crate::errors::domain::{DomainError, NotFoundKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub event_id: i64,
    pub game_id: i64,
    pub description: String,
    pub status: EventStatus,
}

impl From<events::Model> for Event {
    fn from(model: events::Model) -> Self {
        Self {
            event_id: model.event_id,
            game_id: model.game_id,
            description: model.description,
            status: model.status,
        }
    }
}

/// Store descriptions in order under event ids `1..=N`.
pub async fn insert_events<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    descriptions: &[String],
) -> Result<Vec<Event>, DomainError> {
    let rows: Vec<EventCreate> = descriptions
        .iter()
        .zip(1_i64..)
        .map(|(description, event_id)| EventCreate {
            event_id,
            description: description.clone(),
        })
        .collect();

    let events = rows
        .iter()
        .map(|row| Event {
            event_id: row.event_id,
            game_id,
            description: row.description.clone(),
            status: EventStatus::Open,
        })
        .collect();

    events_sea::insert_many(conn, game_id, rows).await?;
    Ok(events)
}

pub async fn require_event<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    event_id: i64,
) -> Result<Event, DomainError> {
    events_sea::find(conn, game_id, event_id)
        .await?
        .map(Event::from)
        .ok_or_else(|| {
            DomainError::not_found(
                NotFoundKind::Event,
                format!("Event {event_id} not found in game {game_id}"),
            )
        })
}

pub async fn list_events<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<Event>, DomainError> {
    let events = events_sea::list_for_game(conn, game_id).await?;
    Ok(events.into_iter().map(Event::from).collect())
}

/// Returns true only for the caller that actually flipped the event.
pub async fn close_event<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    event_id: i64,
) -> Result<bool, DomainError> {
    Ok(events_sea::close_if_open(conn, game_id, event_id).await?)
}
