//! Game services: orchestrate repos and domain rules.

pub mod games;
pub mod votes;
pub mod win_check;
