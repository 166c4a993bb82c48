//! Rock, paper, scissors against a random opponent.
//!
//! A [`Session`] owns the running [`Score`], draws the opponent's [`Move`]
//! from an injected [`Opponent`], and talks to the player through a
//! line-oriented [`Console`].
pub mod console;
pub mod players;
pub mod rules;
pub mod session;

pub use console::*;
pub use players::*;
pub use rules::*;
pub use session::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Round counters kept by the scoreboard.
pub type Count = u32;

// ============================================================================
// INTERACTIVE PROTOCOL
// ============================================================================
/// Shown before every read from the console.
pub const PROMPT: &str = "Enter your move (rock/paper/scissors): ";
/// Reported for anything that is not a move or a command.
pub const INVALID: &str = "Invalid choice! Please enter rock, paper, or scissors.";

// ============================================================================
// RUNTIME CONFIGURATION
// ============================================================================
/// Directory receiving timestamped debug logs.
pub const LOG_DIRECTORY: &str = "logs";
/// Environment variable holding an optional `u64` seed for the opponent.
pub const SEED_VARIABLE: &str = "ROSHAMBO_SEED";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Writes DEBUG level to `logs/`, and only WARN and above to the terminal
/// so the game transcript on stdout stays clean.
pub fn log() -> anyhow::Result<()> {
    log_into(std::path::Path::new(LOG_DIRECTORY))
}

/// Same as [`log`], with the log files written under `directory`.
/// Nothing is installed unless the log file could be created.
pub fn log_into(directory: &std::path::Path) -> anyhow::Result<()> {
    std::fs::create_dir_all(directory)?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(directory.join(format!("{}.log", time)))?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Warn,
        config.clone(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}

/// Read the opponent seed from `ROSHAMBO_SEED`, if any.
/// Unparseable values are ignored with a warning.
pub fn seed() -> Option<u64> {
    let value = std::env::var(SEED_VARIABLE).ok()?;
    match parse_seed(&value) {
        Some(seed) => {
            log::info!("seeding opponent with {}", seed);
            Some(seed)
        }
        None => {
            log::warn!("ignoring {}={:?}, expected an unsigned integer", SEED_VARIABLE, value);
            None
        }
    }
}

fn parse_seed(s: &str) -> Option<u64> {
    s.trim().parse::<u64>().ok()
}
