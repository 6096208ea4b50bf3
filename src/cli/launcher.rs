//! External program delegation
//!
//! Editing and paging hand a note to another program and block until it
//! exits. Commands receive a [`Launcher`] so tests can swap in a recorder.

use std::io::Write;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use anyhow::{Context, Result};

/// Runs external programs synchronously
pub trait Launcher {
    /// Runs `program` on `path`, inheriting the terminal, and waits for it
    fn open(&self, program: &str, path: &Path) -> Result<ExitStatus>;

    /// Runs `program` with `input` on its stdin and waits for it
    fn pipe(&self, program: &str, input: &str) -> Result<ExitStatus>;
}

/// [`Launcher`] backed by real child processes
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn open(&self, program: &str, path: &Path) -> Result<ExitStatus> {
        Command::new(program)
            .arg(path)
            .status()
            .with_context(|| format!("Failed to run '{}'", program))
    }

    fn pipe(&self, program: &str, input: &str) -> Result<ExitStatus> {
        let mut child = Command::new(program)
            .stdin(Stdio::piped())
            .spawn()
            .with_context(|| format!("Failed to run '{}'", program))?;

        if let Some(mut stdin) = child.stdin.take() {
            // The pager may quit before reading everything
            if let Err(e) = stdin.write_all(input.as_bytes()) {
                if e.kind() != std::io::ErrorKind::BrokenPipe {
                    return Err(e).with_context(|| format!("Failed to write to '{}'", program));
                }
            }
        }

        child
            .wait()
            .with_context(|| format!("Failed to wait for '{}'", program))
    }
}
