use crate::Move;

/// One normalized line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Throw(Move),
    Score,
    Quit,
}

impl TryFrom<&str> for Command {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "exit" | "quit" => Ok(Self::Quit),
            "score" => Ok(Self::Score),
            other => Move::try_from(other).map(Self::Throw),
        }
    }
}
