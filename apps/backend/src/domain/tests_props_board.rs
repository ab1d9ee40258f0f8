//! Property tests for board generation (pure domain, no DB).
//!
//! Properties tested:
//! - A board has exactly grid_size² cells, each coordinate once
//! - No event appears twice on one board
//! - Every placed event comes from the supplied pool
//! - Too small a pool is always rejected

use std::collections::HashSet;

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::domain::board::{cell_count, generate_board, MAX_GRID_SIZE, MIN_GRID_SIZE};
use crate::errors::domain::{DomainError, ValidationKind};

fn grid_and_pool() -> impl Strategy<Value = (u8, usize)> {
    (MIN_GRID_SIZE..=MAX_GRID_SIZE)
        .prop_flat_map(|g| (Just(g), cell_count(g)..cell_count(g) + 40))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Property: full grid, distinct coordinates, distinct events
    #[test]
    fn prop_board_is_full_and_distinct(
        (grid_size, pool) in grid_and_pool(),
        seed in any::<u64>(),
    ) {
        let event_ids: Vec<i64> = (1..=pool as i64).collect();
        let mut rng = StdRng::seed_from_u64(seed);
        let board = generate_board(&event_ids, grid_size, &mut rng).unwrap();

        prop_assert_eq!(board.len(), cell_count(grid_size));

        let coords: HashSet<(u8, u8)> = board.iter().map(|s| (s.row, s.column)).collect();
        prop_assert_eq!(coords.len(), board.len());
        prop_assert!(board.iter().all(|s| s.row < grid_size && s.column < grid_size));

        let events: HashSet<i64> = board.iter().map(|s| s.event_id).collect();
        prop_assert_eq!(events.len(), board.len(), "events must not repeat on a board");
        prop_assert!(events.iter().all(|e| (1..=pool as i64).contains(e)));
    }

    /// Property: fewer events than cells never produces a board
    #[test]
    fn prop_small_pool_rejected(
        grid_size in MIN_GRID_SIZE..=MAX_GRID_SIZE,
        shortfall in 1usize..4,
        seed in any::<u64>(),
    ) {
        let pool = cell_count(grid_size).saturating_sub(shortfall);
        let event_ids: Vec<i64> = (1..=pool as i64).collect();
        let mut rng = StdRng::seed_from_u64(seed);

        let result = generate_board(&event_ids, grid_size, &mut rng);
        prop_assert!(
            matches!(result, Err(DomainError::Validation(ValidationKind::InsufficientEvents, _))),
            "expected InsufficientEvents"
        );
    }
}
