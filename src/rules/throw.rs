use super::Outcome;
use colored::*;
use rand::Rng;

/// A throw in rock, paper, scissors.
///
/// The beats-relation is cyclic: rock beats scissors, scissors beats paper,
/// paper beats rock.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Move {
    /// Beats Scissors, loses to Paper.
    Rock,
    /// Beats Rock, loses to Scissors.
    Paper,
    /// Beats Paper, loses to Rock.
    Scissors,
}

impl Move {
    pub const fn all() -> [Self; 3] {
        [Self::Rock, Self::Paper, Self::Scissors]
    }
    /// The one move this move defeats.
    pub const fn prey(&self) -> Self {
        match self {
            Self::Rock => Self::Scissors,
            Self::Paper => Self::Rock,
            Self::Scissors => Self::Paper,
        }
    }
    pub fn beats(&self, other: &Self) -> bool {
        self.prey() == *other
    }
    /// Resolve a round from the point of view of `self`.
    pub fn versus(self, opponent: Self) -> Outcome {
        Outcome::from((self, opponent))
    }
    /// Uniform draw from a caller-supplied generator.
    pub fn sample<R: Rng>(rng: &mut R) -> Self {
        Self::all()[rng.random_range(0..3usize)]
    }
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Rock => "rock",
            Self::Paper => "paper",
            Self::Scissors => "scissors",
        }
    }
}

impl TryFrom<&str> for Move {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "rock" => Ok(Self::Rock),
            "paper" => Ok(Self::Paper),
            "scissors" => Ok(Self::Scissors),
            other => Err(format!("invalid move {:?}", other)),
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Rock => write!(f, "{}", self.label().red()),
            Self::Paper => write!(f, "{}", self.label().cyan()),
            Self::Scissors => write!(f, "{}", self.label().yellow()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cyclic_dominance() {
        assert!(Move::Rock.beats(&Move::Scissors));
        assert!(Move::Scissors.beats(&Move::Paper));
        assert!(Move::Paper.beats(&Move::Rock));
    }

    #[test]
    fn each_move_beats_exactly_one_other() {
        for m in Move::all() {
            let beaten = Move::all().iter().filter(|o| m.beats(o)).count();
            assert_eq!(beaten, 1);
            assert!(!m.beats(&m));
        }
    }

    #[test]
    fn parse_is_case_and_whitespace_insensitive() {
        assert_eq!(Move::try_from("  ROCK \n"), Ok(Move::Rock));
        assert_eq!(Move::try_from("Paper"), Ok(Move::Paper));
        assert_eq!(Move::try_from("scissors"), Ok(Move::Scissors));
        assert!(Move::try_from("lizard").is_err());
        assert!(Move::try_from("").is_err());
    }

    #[test]
    fn labels_parse_back() {
        for m in Move::all() {
            assert_eq!(Move::try_from(m.label()), Ok(m));
        }
    }

    #[test]
    fn display_is_lowercase_label() {
        colored::control::set_override(false);
        assert_eq!(Move::Scissors.to_string(), "scissors");
    }

    #[test]
    fn sample_stays_in_domain() {
        use rand::SeedableRng;
        let ref mut rng = rand::rngs::SmallRng::seed_from_u64(3);
        for _ in 0..64 {
            assert!(Move::all().contains(&Move::sample(rng)));
        }
    }
}
