use super::Opponent;
use crate::Move;

/// Opponent that never changes its mind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stubborn(pub Move);

impl Opponent for Stubborn {
    fn throw(&mut self) -> Move {
        self.0
    }
}
