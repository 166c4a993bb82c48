use crate::*;

const BANNER: &[&str] = &[
    "",
    "===================================",
    "Welcome to Rock, Paper, Scissors!",
    "===================================",
    "",
    "How to play:",
    "- Type \"rock\", \"paper\", or \"scissors\" to make your move",
    "- Type \"score\" to see the current score",
    "- Type \"exit\" or \"quit\" to end the game",
    "",
];

/// Where the interactive loop stands after handling a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    Terminated,
}

/// One sitting at the table: an opponent and the running score.
#[derive(Debug)]
pub struct Session<O> {
    opponent: O,
    score: Score,
}

impl<O: Opponent> Session<O> {
    pub fn new(opponent: O) -> Self {
        Self {
            opponent,
            score: Score::default(),
        }
    }
    pub fn score(&self) -> &Score {
        &self.score
    }
    /// Draw the computer's move for the next round.
    pub fn choose(&mut self) -> Move {
        self.opponent.throw()
    }
    /// Play one round and record its outcome.
    pub fn play(&mut self, player: Move) -> (Move, Outcome) {
        let opponent = self.choose();
        let outcome = player.versus(opponent);
        self.score.record(outcome);
        log::debug!(
            "round {}: {:?} vs {:?} -> {:?}",
            self.score.games(),
            player,
            opponent,
            outcome
        );
        (opponent, outcome)
    }
    pub fn scoreboard(&self) -> String {
        self.score.to_string()
    }

    /// Prompt for lines until the player quits or the input runs dry.
    pub fn run<C: Console>(&mut self, console: &mut C) -> std::io::Result<()> {
        log::info!("session started");
        for line in BANNER {
            console.write(line)?;
        }
        while let Some(ref input) = console.read(PROMPT)? {
            if self.handle(console, input)? == Phase::Terminated {
                break;
            }
        }
        log::info!(
            "session ended after {} games ({} won, {} lost, {} tied)",
            self.score.games(),
            self.score.wins(),
            self.score.losses(),
            self.score.ties()
        );
        Ok(())
    }

    /// Dispatch a single line of input.
    pub fn handle<C: Console>(&mut self, console: &mut C, input: &str) -> std::io::Result<Phase> {
        match Command::try_from(input) {
            Ok(Command::Quit) => {
                console.write("")?;
                console.write("Thanks for playing!")?;
                console.write("Final score:")?;
                self.show(console)?;
                Ok(Phase::Terminated)
            }
            Ok(Command::Score) => {
                self.show(console)?;
                Ok(Phase::Running)
            }
            Ok(Command::Throw(player)) => {
                let (opponent, outcome) = self.play(player);
                console.write(&format!("You chose: {}", player))?;
                console.write(&format!("Computer chose: {}", opponent))?;
                console.write(&format!("{}", outcome))?;
                self.show(console)?;
                Ok(Phase::Running)
            }
            Err(e) => {
                log::debug!("{}", e);
                console.write(INVALID)?;
                Ok(Phase::Running)
            }
        }
    }

    fn show<C: Console>(&self, console: &mut C) -> std::io::Result<()> {
        console.write("")?;
        console.write(&self.scoreboard())?;
        console.write("")
    }
}
