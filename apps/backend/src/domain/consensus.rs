//! Dynamic consensus threshold for closing an event.

/// Games up to this size need every player to agree.
pub const UNANIMITY_MAX_PLAYERS: u64 = 3;
/// Larger games never close on fewer votes than this.
pub const MIN_THRESHOLD: u64 = 2;

// Relative slack, in ULPs, so exact products like 20 * 0.7 don't round up.
const CEIL_ULPS: f64 = 4.0;

/// Votes needed to close an event in a game with `player_count` players.
///
/// Up to three players: all of them. Beyond that:
/// `max(2, ceil(player_count * ratio))`.
pub fn consensus_threshold(player_count: u64, ratio: f64) -> u64 {
    if player_count <= UNANIMITY_MAX_PLAYERS {
        return player_count;
    }
    let product = player_count as f64 * ratio;
    let scaled = (product - product * CEIL_ULPS * f64::EPSILON).ceil();
    (scaled.max(0.0) as u64).max(MIN_THRESHOLD)
}

/// True once the tally meets the threshold.
pub fn reaches_consensus(vote_count: u64, threshold: u64) -> bool {
    vote_count >= threshold
}
