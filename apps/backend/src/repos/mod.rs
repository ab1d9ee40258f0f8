//! Domain-facing repository functions over the SeaORM adapters.

pub mod boards;
pub mod events;
pub mod games;
pub mod votes;
