//! DTOs for events_sea adapter.

/// One event row to insert; ids are assigned by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventCreate {
    pub event_id: i64,
    pub description: String,
}
