pub mod caller;
pub mod game_id;

pub use caller::{Caller, CHANNEL_HEADER, USER_HEADER};
pub use game_id::GameId;
