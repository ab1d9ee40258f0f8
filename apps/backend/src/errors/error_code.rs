//! Error codes for the bingo command API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings that
//! appear in problem+json responses.

use core::fmt;

/// Centralized error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Caller & Channel
    /// Missing or malformed caller identity header
    InvalidCaller,
    /// Command issued outside the configured channel
    WrongChannel,
    /// Caller has no board in the target game
    NotAPlayer,
    /// Generic access denial
    Forbidden,

    // Request Validation
    /// Invalid game ID provided
    InvalidGameId,
    /// Grid size outside the supported range
    InvalidGridSize,
    /// No players were listed for a new game
    NoPlayers,
    /// Game title is blank
    InvalidTitle,
    /// Events file yielded no events
    NoEvents,
    /// Fewer events than board cells
    InsufficientEvents,
    /// General validation error
    ValidationError,
    /// General bad request error
    BadRequest,

    // Resource Not Found
    /// Game not found
    GameNotFound,
    /// Event not found in the game
    EventNotFound,
    /// Board not found
    BoardNotFound,
    /// No game id given and none is active
    NoActiveGame,
    /// General not found error
    NotFound,

    // Game Rule Conflicts
    /// Player already has a board in this game
    DuplicateBoard,
    /// Caller already voted for this event
    DuplicateVote,
    /// Event already reached consensus
    EventAlreadyClosed,
    /// Generic conflict (fallback for unmatched conflicts)
    Conflict,

    // System Errors
    /// Database error
    DbError,
    /// Database unavailable
    DbUnavailable,
    /// Database busy or timed out
    DbTimeout,

    // Database Constraint Violations
    /// Unique constraint violation (generic 409)
    UniqueViolation,
    /// Foreign key constraint violation
    FkViolation,
    /// Record not found (generic 404 for DB-driven not-found)
    RecordNotFound,

    /// Internal server error
    Internal,
    /// Internal server error (explicit problem code)
    InternalError,
    /// Configuration error
    ConfigError,
    /// Data corruption detected
    DataCorruption,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidCaller => "INVALID_CALLER",
            Self::WrongChannel => "WRONG_CHANNEL",
            Self::NotAPlayer => "NOT_A_PLAYER",
            Self::Forbidden => "FORBIDDEN",

            Self::InvalidGameId => "INVALID_GAME_ID",
            Self::InvalidGridSize => "INVALID_GRID_SIZE",
            Self::NoPlayers => "NO_PLAYERS",
            Self::InvalidTitle => "INVALID_TITLE",
            Self::NoEvents => "NO_EVENTS",
            Self::InsufficientEvents => "INSUFFICIENT_EVENTS",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",

            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::EventNotFound => "EVENT_NOT_FOUND",
            Self::BoardNotFound => "BOARD_NOT_FOUND",
            Self::NoActiveGame => "NO_ACTIVE_GAME",
            Self::NotFound => "NOT_FOUND",

            Self::DuplicateBoard => "DUPLICATE_BOARD",
            Self::DuplicateVote => "DUPLICATE_VOTE",
            Self::EventAlreadyClosed => "EVENT_ALREADY_CLOSED",
            Self::Conflict => "CONFLICT",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",

            Self::UniqueViolation => "UNIQUE_VIOLATION",
            Self::FkViolation => "FK_VIOLATION",
            Self::RecordNotFound => "RECORD_NOT_FOUND",

            Self::Internal => "INTERNAL",
            Self::InternalError => "INTERNAL_ERROR",
            Self::ConfigError => "CONFIG_ERROR",
            Self::DataCorruption => "DATA_CORRUPTION",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
