//! The interactive game: score keeping, command parsing, and the loop.
mod command;
mod game;
mod score;

pub use command::*;
pub use game::*;
pub use score::*;
