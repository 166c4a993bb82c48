use crate::Count;
use crate::Outcome;

/// Running tally of one session.
///
/// Ties are never stored; they are whatever is left of `games` after wins
/// and losses, so `wins + losses <= games` holds by construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    games: Count,
    wins: Count,
    losses: Count,
}

impl Score {
    pub fn games(&self) -> Count {
        self.games
    }
    /// Rounds the player won.
    pub fn wins(&self) -> Count {
        self.wins
    }
    /// Rounds the computer won.
    pub fn losses(&self) -> Count {
        self.losses
    }
    pub fn ties(&self) -> Count {
        self.games - self.wins - self.losses
    }
    pub fn record(&mut self, outcome: Outcome) {
        self.games += 1;
        match outcome {
            Outcome::Player => self.wins += 1,
            Outcome::Computer => self.losses += 1,
            Outcome::Tie => {}
        }
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "----- CURRENT SCORE -----")?;
        writeln!(f, "Games played: {}", self.games())?;
        writeln!(f, "You: {}", self.wins())?;
        writeln!(f, "Computer: {}", self.losses())?;
        writeln!(f, "Ties: {}", self.ties())?;
        write!(f, "------------------------")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let score = Score::default();
        assert_eq!(score.games(), 0);
        assert_eq!(score.wins(), 0);
        assert_eq!(score.losses(), 0);
        assert_eq!(score.ties(), 0);
    }

    #[test]
    fn each_outcome_bumps_one_counter() {
        let mut score = Score::default();
        score.record(Outcome::Player);
        score.record(Outcome::Computer);
        score.record(Outcome::Computer);
        score.record(Outcome::Tie);
        assert_eq!(score.games(), 4);
        assert_eq!(score.wins(), 1);
        assert_eq!(score.losses(), 2);
        assert_eq!(score.ties(), 1);
    }

    #[test]
    fn scoreboard_lines() {
        let mut score = Score::default();
        score.record(Outcome::Player);
        score.record(Outcome::Tie);
        assert_eq!(
            score.to_string(),
            "----- CURRENT SCORE -----\n\
             Games played: 2\n\
             You: 1\n\
             Computer: 0\n\
             Ties: 1\n\
             ------------------------"
        );
    }
}
