//! Backend test support utilities
//!
//! Shared by the bingo backend's integration tests: one-time logging
//! initialization and assertions for problem+json error responses.

pub mod logging;
pub mod problem_details;
