//! Terminal prompts
//!
//! Commands talk to the user through the [`Console`] trait so prompts can be
//! scripted in tests. The confirmation decision itself is pure.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use thiserror::Error;

/// Raised when the user declines a confirmation prompt
#[derive(Debug, Error)]
#[error("Cancelled.")]
pub struct Cancelled;

/// Interactive line-based I/O
pub trait Console {
    /// Prints a line of text
    fn say(&mut self, text: &str) -> Result<()>;

    /// Asks a free-text question; `None` at end of input
    fn ask(&mut self, question: &str) -> Result<Option<String>>;

    /// Asks a yes/no question, re-asking until the answer is understood
    fn confirm(&mut self, question: &str, default: Option<bool>) -> Result<bool>;
}

/// Interprets a yes/no answer; `None` means the input was not understood
pub fn parse_answer(input: &str, default: Option<bool>) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        "" => default,
        _ => None,
    }
}

/// Decides whether a destructive action goes ahead
pub fn should_proceed(force: bool, answer: Option<bool>) -> bool {
    force || answer.unwrap_or(false)
}

/// Asks for confirmation unless `force` is set, failing with [`Cancelled`] on refusal
pub fn confirm_or_cancel(console: &mut dyn Console, force: bool, question: &str) -> Result<()> {
    let answer = if force {
        None
    } else {
        Some(console.confirm(question, Some(false))?)
    };

    if should_proceed(force, answer) {
        Ok(())
    } else {
        Err(Cancelled.into())
    }
}

/// [`Console`] over a reader and a writer, normally stdin and stdout
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl Terminal<io::StdinLock<'static>, Box<dyn Write>> {
    /// Reads stdin and writes to stdout, or to stderr when stdout carries JSON
    pub fn stdio(json: bool) -> Self {
        let output: Box<dyn Write> = if json {
            Box::new(io::stderr())
        } else {
            Box::new(io::stdout())
        };
        Self::new(io::stdin().lock(), output)
    }
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Reads one line without its terminator; `None` at end of input
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from stdin")?;

        if read == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }

        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn write_prompt(&mut self, prompt: &str) -> Result<()> {
        write!(self.output, "{}", prompt)?;
        self.output.flush().context("Failed to flush stdout")
    }
}

impl<R: BufRead, W: Write> Console for Terminal<R, W> {
    fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text).context("Failed to write to stdout")
    }

    fn ask(&mut self, question: &str) -> Result<Option<String>> {
        loop {
            self.write_prompt(&format!("{}: ", question))?;
            match self.read_line()? {
                None => return Ok(None),
                Some(line) if line.trim().is_empty() => continue,
                Some(line) => return Ok(Some(line)),
            }
        }
    }

    fn confirm(&mut self, question: &str, default: Option<bool>) -> Result<bool> {
        let hint = match default {
            Some(true) => "[Y/n]",
            Some(false) => "[y/N]",
            None => "[y/n]",
        };

        loop {
            self.write_prompt(&format!("{} {}: ", question, hint))?;
            let Some(line) = self.read_line()? else {
                return Ok(default.unwrap_or(false));
            };

            match parse_answer(&line, default) {
                Some(answer) => return Ok(answer),
                None => self.say("Error: invalid input")?,
            }
        }
    }
}
