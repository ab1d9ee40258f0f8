pub mod board_squares;
pub mod boards;
pub mod events;
pub mod games;
pub mod votes;

pub use board_squares::Entity as BoardSquares;
pub use boards::Entity as Boards;
pub use events::{Entity as Events, EventStatus};
pub use games::Entity as Games;
pub use votes::Entity as Votes;
