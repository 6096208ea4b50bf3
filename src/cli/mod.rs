//! # Command-Line Interface
//!
//! User-facing CLI commands and output formatting.
//!
//! ## Commands
//!
//! | Group | Purpose | Examples |
//! |-------|---------|----------|
//! | Project | Project lifecycle | `init-project`, `delete-project` |
//! | Context | Note lifecycle | `create-context`, `edit-context`, `view-context` |
//! | Listing | Browse notes | `list-contexts` |
//! | Guide | First-run help | `walkthrough`, `hello` |
//!
//! ## Output Formats
//!
//! All commands support the `--format` flag:
//! - `text` (default) - Human-readable output
//! - `json` - Machine-parseable JSON
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for debug output on stderr:
//! ```bash
//! context --verbose list-contexts my-project
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod context_cmd;
mod launcher;
mod output;
mod project_cmd;
mod prompt;
mod session;
mod walkthrough;

#[cfg(all(test, unix))]
mod testing;

pub use app::{execute, run, Cli, Commands};
pub use launcher::{Launcher, SystemLauncher};
pub use output::{Output, OutputFormat};
pub use prompt::{parse_answer, should_proceed, Cancelled, Console, Terminal};
pub use session::Session;
