//! Sources of the computer's throw.
//!
//! - [`Fish`] — uniform random throws, optionally seeded
//! - [`Stubborn`] — always throws the same move
mod fish;
mod stubborn;

pub use fish::*;
pub use stubborn::*;

use crate::Move;

/// Anything that can pick the computer's move for a round.
pub trait Opponent {
    fn throw(&mut self) -> Move;
}
