use super::Console;
use std::io::BufRead;
use std::io::Write;

/// [`Console`] over any buffered reader and writer.
///
/// The binary wires it to stdin/stdout; tests wire it to in-memory buffers.
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl Terminal<std::io::StdinLock<'static>, std::io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R, W> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Console for Terminal<R, W> {
    fn read(&mut self, prompt: &str) -> std::io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        let ref mut bytes = Vec::new();
        match self.input.read_until(b'\n', bytes) {
            Ok(0) => Ok(None),
            Ok(_) => Ok(Some(
                String::from_utf8_lossy(bytes)
                    .trim_end_matches(['\r', '\n'])
                    .to_string(),
            )),
            Err(e) => {
                log::warn!("input unreadable, ending session: {}", e);
                Ok(None)
            }
        }
    }
    fn write(&mut self, line: &str) -> std::io::Result<()> {
        writeln!(self.output, "{}", line)
    }
}
