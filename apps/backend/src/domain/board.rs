//! Randomized event-to-cell assignment for a single player's board.

use rand::seq::index;
use rand::Rng;

use crate::errors::domain::{DomainError, ValidationKind};

pub const MIN_GRID_SIZE: u8 = 2;
pub const MAX_GRID_SIZE: u8 = 10;

/// One cell of a generated board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SquarePlacement {
    pub row: u8,
    pub column: u8,
    pub event_id: i64,
}

/// Number of cells on a `grid_size x grid_size` board.
pub fn cell_count(grid_size: u8) -> usize {
    usize::from(grid_size) * usize::from(grid_size)
}

pub fn validate_grid_size(grid_size: i64) -> Result<u8, DomainError> {
    u8::try_from(grid_size)
        .ok()
        .filter(|g| (MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(g))
        .ok_or_else(|| {
            DomainError::validation(
                ValidationKind::InvalidGridSize,
                format!(
                    "Grid size must be between {MIN_GRID_SIZE} and {MAX_GRID_SIZE}, got {grid_size}"
                ),
            )
        })
}

/// Pick `grid_size²` distinct events uniformly at random and lay them out
/// row-major: the i-th sampled event lands at `(i / grid_size, i % grid_size)`.
pub fn generate_board<R: Rng + ?Sized>(
    event_ids: &[i64],
    grid_size: u8,
    rng: &mut R,
) -> Result<Vec<SquarePlacement>, DomainError> {
    let needed = cell_count(grid_size);
    if event_ids.len() < needed {
        return Err(DomainError::validation(
            ValidationKind::InsufficientEvents,
            format!(
                "Need at least {needed} events for a {grid_size}x{grid_size} board, got {}",
                event_ids.len()
            ),
        ));
    }

    let picks = index::sample(rng, event_ids.len(), needed);
    let squares = picks
        .iter()
        .enumerate()
        .map(|(cell, pick)| SquarePlacement {
            row: (cell / usize::from(grid_size)) as u8,
            column: (cell % usize::from(grid_size)) as u8,
            event_id: event_ids[pick],
        })
        .collect();

    Ok(squares)
}
