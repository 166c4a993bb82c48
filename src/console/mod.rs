//! Line-oriented conversation with the player.
mod terminal;

pub use terminal::*;

/// Blocking prompt/response channel to the player.
pub trait Console {
    /// Show `prompt` and wait for one line of input.
    /// `Ok(None)` means the input is exhausted and the session should end.
    fn read(&mut self, prompt: &str) -> std::io::Result<Option<String>>;
    /// Emit one line of text.
    fn write(&mut self, line: &str) -> std::io::Result<()>;
}
