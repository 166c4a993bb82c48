//! Play rock, paper, scissors against the computer on stdin/stdout.
//!
//! Set `ROSHAMBO_SEED` to replay the same sequence of computer throws.

use roshambo::*;

fn main() -> anyhow::Result<()> {
    if let Err(e) = log() {
        eprintln!("logging disabled: {}", e);
    }
    let ref mut terminal = Terminal::stdio();
    Session::new(Fish::from(seed())).run(terminal)?;
    Ok(())
}
