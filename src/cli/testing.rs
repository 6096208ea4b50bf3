//! Test doubles for the console and launcher seams

use std::cell::RefCell;
use std::collections::VecDeque;
use std::os::unix::process::ExitStatusExt;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;

use anyhow::Result;

use super::launcher::Launcher;
use super::output::{Output, OutputFormat};
use super::prompt::{parse_answer, Console};
use super::session::Session;
use crate::storage::{Config, DataDir};

/// Console fed from a fixed list of answers, recording everything shown
#[derive(Default)]
pub struct ScriptedConsole {
    answers: VecDeque<String>,
    pub transcript: Vec<String>,
}

impl ScriptedConsole {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|a| a.to_string()).collect(),
            transcript: Vec::new(),
        }
    }

    pub fn text(&self) -> String {
        self.transcript.join("\n")
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Console for ScriptedConsole {
    fn say(&mut self, text: &str) -> Result<()> {
        self.transcript.push(text.to_string());
        Ok(())
    }

    fn ask(&mut self, question: &str) -> Result<Option<String>> {
        self.transcript.push(format!("? {}", question));
        Ok(self.answers.pop_front())
    }

    fn confirm(&mut self, question: &str, default: Option<bool>) -> Result<bool> {
        self.transcript.push(format!("? {}", question));
        let answer = self.answers.pop_front().unwrap_or_default();
        Ok(parse_answer(&answer, default).unwrap_or(false))
    }
}

/// Launcher that records calls instead of spawning processes
#[derive(Default)]
pub struct RecordingLauncher {
    pub opened: RefCell<Vec<(String, PathBuf)>>,
    pub piped: RefCell<Vec<(String, String)>>,
    pub exit_code: i32,
}

impl Launcher for RecordingLauncher {
    fn open(&self, program: &str, path: &Path) -> Result<ExitStatus> {
        self.opened
            .borrow_mut()
            .push((program.to_string(), path.to_path_buf()));
        Ok(ExitStatus::from_raw(self.exit_code << 8))
    }

    fn pipe(&self, program: &str, input: &str) -> Result<ExitStatus> {
        self.piped
            .borrow_mut()
            .push((program.to_string(), input.to_string()));
        Ok(ExitStatus::from_raw(self.exit_code << 8))
    }
}

/// Runs a command against a data root with scripted answers
pub fn run_in<F>(
    data_root: &Path,
    answers: &[&str],
    config: &Config,
    launcher: &RecordingLauncher,
    f: F,
) -> (Result<()>, ScriptedConsole)
where
    F: FnOnce(&mut Session<'_>) -> Result<()>,
{
    let output = Output::new(OutputFormat::Text, false);
    let mut console = ScriptedConsole::new(answers);

    let result = {
        let mut session = Session {
            output: &output,
            config,
            data: DataDir::new(data_root),
            console: &mut console,
            launcher,
        };
        f(&mut session)
    };

    (result, console)
}
