use super::Move;
use colored::*;

/// Result of a round, from the player's point of view.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Outcome {
    Player,
    Computer,
    Tie,
}

impl Outcome {
    /// Sentence tinted for the terminal. Ties keep the default colour.
    pub fn paint(&self) -> ColoredString {
        match self {
            Self::Player => self.sentence().green(),
            Self::Computer => self.sentence().red(),
            Self::Tie => self.sentence().normal(),
        }
    }
    pub const fn sentence(&self) -> &'static str {
        match self {
            Self::Player => "You win this round!",
            Self::Computer => "Computer wins this round!",
            Self::Tie => "It's a tie!",
        }
    }
}

/// (player, opponent) -> outcome
impl From<(Move, Move)> for Outcome {
    fn from((player, opponent): (Move, Move)) -> Self {
        if player == opponent {
            Self::Tie
        } else if player.beats(&opponent) {
            Self::Player
        } else {
            Self::Computer
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.paint())
    }
}
