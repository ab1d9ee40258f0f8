//! SeaORM adapters: thin query functions returning `DbErr`.

pub mod boards_sea;
pub mod events_sea;
pub mod games_sea;
pub mod votes_sea;
