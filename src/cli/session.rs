//! Everything a command needs to run

use super::launcher::Launcher;
use super::output::Output;
use super::prompt::Console;
use crate::storage::{Config, DataDir};

/// Per-invocation state handed to every command
pub struct Session<'a> {
    pub output: &'a Output,
    pub config: &'a Config,
    pub data: DataDir,
    pub console: &'a mut dyn Console,
    pub launcher: &'a dyn Launcher,
}
