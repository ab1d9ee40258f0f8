//! Vote casting and consensus closing.

use sea_orm::ConnectionTrait;
use tracing::{debug, info};

use super::games::resolve_game;
use super::win_check::check_for_winners;
use crate::config::game::GameRules;
use crate::domain::consensus::{consensus_threshold, reaches_consensus};
use crate::errors::domain::{ConflictKind, DomainError, ForbiddenKind};
use crate::repos::{boards, events, votes};

/// Result of one accepted vote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteOutcome {
    pub game_id: i64,
    pub event_id: i64,
    pub description: String,
    pub votes: u64,
    pub threshold: u64,
    pub player_count: u64,
    /// Consensus reached with this vote; the event is now CLOSED
    pub closed: bool,
    /// Players whose boards are fully closed, in board order
    pub winners: Vec<i64>,
}

/// Consensus voting service.
pub struct VoteService {
    rules: GameRules,
}

impl VoteService {
    pub fn new(rules: GameRules) -> Self {
        Self { rules }
    }

    /// Record `user_id`'s vote that `event_id` happened.
    ///
    /// The vote commits on its own; closing is a conditional update, so
    /// when two votes race past the threshold only one performs the close
    /// and reports winners.
    pub async fn cast_vote<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        game_id: Option<i64>,
        event_id: i64,
        user_id: i64,
    ) -> Result<VoteOutcome, DomainError> {
        let game = resolve_game(conn, game_id).await?;
        let game_id = game.game_id;

        if boards::find_board(conn, game_id, user_id).await?.is_none() {
            debug!(game_id, user_id, "vote from non-player");
            return Err(DomainError::forbidden(
                ForbiddenKind::NotAPlayer,
                format!("User {user_id} is not playing game {game_id}"),
            ));
        }

        let event = events::require_event(conn, game_id, event_id).await?;
        if event.status.is_closed() {
            return Err(DomainError::conflict(
                ConflictKind::EventAlreadyClosed,
                format!("Event {event_id} is already closed"),
            ));
        }

        if votes::has_voted(conn, game_id, event_id, user_id).await? {
            return Err(DomainError::conflict(
                ConflictKind::DuplicateVote,
                format!("You have already voted for event {event_id}"),
            ));
        }
        votes::insert_vote(conn, game_id, event_id, user_id).await?;

        let player_count = boards::count_boards(conn, game_id).await?;
        let vote_count = votes::count_votes(conn, game_id, event_id).await?;
        let threshold = consensus_threshold(player_count, self.rules.consensus_ratio);

        debug!(
            game_id,
            event_id,
            user_id,
            votes = vote_count,
            threshold,
            "vote recorded"
        );

        let mut outcome = VoteOutcome {
            game_id,
            event_id,
            description: event.description,
            votes: vote_count,
            threshold,
            player_count,
            closed: false,
            winners: Vec::new(),
        };

        if reaches_consensus(vote_count, threshold) {
            outcome.closed = events::close_event(conn, game_id, event_id).await?;
            if outcome.closed {
                info!(game_id, event_id, votes = vote_count, threshold, "event closed");
                outcome.winners = check_for_winners(conn, game_id, game.grid_size).await?;
            } else {
                debug!(game_id, event_id, "event closed concurrently");
            }
        }

        Ok(outcome)
    }
}
