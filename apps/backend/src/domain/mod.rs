//! Domain layer: pure game rules, no database or HTTP.

pub mod board;
pub mod consensus;
pub mod csv_events;

#[cfg(test)]
mod tests_props_board;

pub use board::{generate_board, SquarePlacement};
pub use consensus::consensus_threshold;
pub use csv_events::{parse_events, ParsedEvent};
