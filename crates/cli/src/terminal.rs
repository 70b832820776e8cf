//! Line-oriented terminal access.
//!
//! The menu loop only ever needs two things: ask a question and read one
//! line back, or print one line. Keeping that behind a trait lets tests
//! script the user's answers and capture everything printed.

use std::io::{self, BufRead, Write};

pub trait Terminal {
    /// Show `prompt` (no newline) and read one line of input.
    ///
    /// The trailing line terminator is stripped. Returns `Ok(None)` once
    /// input is exhausted.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Print one line of output
    fn write_line(&mut self, line: &str) -> io::Result<()>;
}

/// Terminal backed by any reader/writer pair, stdin/stdout by default
pub struct StdTerminal<R, W> {
    input: R,
    output: W,
}

impl StdTerminal<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> StdTerminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Terminal for StdTerminal<R, W> {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.output.write_all(prompt.as_bytes())?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.strip_suffix('\n').unwrap_or(&line);
        let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
        Ok(Some(trimmed.to_string()))
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }
}
