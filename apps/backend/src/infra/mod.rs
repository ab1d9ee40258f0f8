//! Infrastructure layer: connection pool, state building and DB error mapping.

pub mod db;
pub mod db_errors;
pub mod state;
