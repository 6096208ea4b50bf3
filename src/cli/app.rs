//! Main CLI application structure

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::launcher::{Launcher, SystemLauncher};
use super::output::{Output, OutputFormat};
use super::prompt::{Console, Terminal};
use super::session::Session;
use super::{context_cmd, project_cmd, walkthrough};
use crate::storage::{Config, DataDir};

#[derive(Parser)]
#[command(name = "context")]
#[command(author, version, about = "Manage Markdown context notes grouped by project")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format [default: text]
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Directory holding all projects [default: context_data]
    #[arg(long, global = true, env = "CONTEXT_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Say hello to confirm the CLI works
    Hello,

    /// Initialize a new project with every category folder and metadata
    #[command(name = "init-project", visible_alias = "init")]
    InitProject {
        /// Project name (used as the directory name)
        project: String,
    },

    /// Delete a project and all its context folders and files
    DeleteProject {
        /// Project name
        project: String,

        /// Skip confirmation
        #[arg(long)]
        force: bool,
    },

    /// Create a new context file (e.g. facts/my-topic.md)
    CreateContext {
        /// Project name
        project: String,

        /// Context type (facts, decisions, goals, ...)
        category: String,

        /// File name without the .md extension
        name: String,
    },

    /// Delete a context file from a project
    DeleteContext {
        /// Project name
        project: String,

        /// Context type
        category: String,

        /// File name without the .md extension
        name: String,

        /// Skip confirmation
        #[arg(long)]
        force: bool,
    },

    /// Edit a context file in your editor ($EDITOR, default nano)
    EditContext {
        /// Project name
        project: String,

        /// Context type
        category: String,

        /// File name without the .md extension
        name: String,
    },

    /// View the contents of a context file
    ViewContext {
        /// Project name
        project: String,

        /// Context type
        category: String,

        /// File name without the .md extension
        name: String,

        /// Show the file through a pager ($PAGER, default less)
        #[arg(long)]
        pager: bool,
    },

    /// List context files in a project, optionally for one context type
    ListContexts {
        /// Project name
        project: String,

        /// Optional context type (e.g. facts, goals)
        category: Option<String>,
    },

    /// Walk through setting up a first project, optionally interactively
    Walkthrough,
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let json = resolve_format(&cli, &config) == OutputFormat::Json;
    let mut console = Terminal::stdio(json);

    execute(cli, &config, &mut console, &SystemLauncher)
}

/// Picks the output format: `--format`, then config, then text
fn resolve_format(cli: &Cli, config: &Config) -> OutputFormat {
    cli.format.or(config.default_format).unwrap_or_default()
}

/// Runs a parsed command with the given configuration and I/O seams
pub fn execute(
    cli: Cli,
    config: &Config,
    console: &mut dyn Console,
    launcher: &dyn Launcher,
) -> Result<()> {
    let output = Output::new(resolve_format(&cli, config), cli.verbose);

    output.verbose("Context CLI starting");

    let data = DataDir::new(config.data_dir(cli.data_dir.as_deref()));
    output.verbose(&format!("Data root: {}", data.root().display()));

    let mut session = Session {
        output: &output,
        config,
        data,
        console,
        launcher,
    };

    match cli.command {
        Commands::Hello => output.success("Hello from Context Utility!"),

        Commands::InitProject { project } => project_cmd::init(&mut session, &project)?,
        Commands::DeleteProject { project, force } => {
            project_cmd::delete(&mut session, &project, force)?
        }

        Commands::CreateContext {
            project,
            category,
            name,
        } => context_cmd::create(&mut session, &project, &category, &name)?,
        Commands::DeleteContext {
            project,
            category,
            name,
            force,
        } => context_cmd::delete(&mut session, &project, &category, &name, force)?,
        Commands::EditContext {
            project,
            category,
            name,
        } => context_cmd::edit(&mut session, &project, &category, &name)?,
        Commands::ViewContext {
            project,
            category,
            name,
            pager,
        } => context_cmd::view(&mut session, &project, &category, &name, pager)?,
        Commands::ListContexts { project, category } => {
            context_cmd::list(&mut session, &project, category.as_deref())?
        }

        Commands::Walkthrough => walkthrough::run(&mut session)?,
    }

    output.verbose("Command completed successfully");
    Ok(())
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::cli::testing::{RecordingLauncher, ScriptedConsole};
    use clap::CommandFactory;
    use tempfile::TempDir;

    fn execute_args(dir: &TempDir, args: &[&str], launcher: &RecordingLauncher) -> Result<()> {
        let root = dir.path().join("data");
        let mut argv = vec!["context", "--data-dir", root.to_str().unwrap()];
        argv.extend_from_slice(args);

        let cli = Cli::try_parse_from(argv)?;
        let mut console = ScriptedConsole::new(&[]);
        execute(cli, &Config::default(), &mut console, launcher)
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn init_alias_parses() {
        let cli = Cli::try_parse_from(["context", "init", "demo"]).unwrap();
        assert!(matches!(cli.command, Commands::InitProject { ref project } if project == "demo"));
    }

    #[test]
    fn list_category_is_optional() {
        let cli = Cli::try_parse_from(["context", "list-contexts", "demo"]).unwrap();
        assert!(matches!(cli.command, Commands::ListContexts { category: None, .. }));
    }

    #[test]
    fn init_requires_a_name() {
        assert!(Cli::try_parse_from(["context", "init-project"]).is_err());
    }

    #[test]
    fn create_then_view_round_trip() {
        let dir = TempDir::new().unwrap();
        let launcher = RecordingLauncher::default();

        execute_args(&dir, &["init", "p"], &launcher).unwrap();
        execute_args(&dir, &["create-context", "p", "facts", "note"], &launcher).unwrap();
        execute_args(&dir, &["view-context", "p", "facts", "note", "--pager"], &launcher)
            .unwrap();

        let piped = launcher.piped.borrow();
        assert!(piped[0].1.starts_with("# Note\n"));
    }

    #[test]
    fn edit_uses_resolved_editor() {
        let dir = TempDir::new().unwrap();
        let launcher = RecordingLauncher::default();

        execute_args(&dir, &["init", "p"], &launcher).unwrap();
        execute_args(&dir, &["create-context", "p", "facts", "note"], &launcher).unwrap();
        execute_args(&dir, &["edit-context", "p", "facts", "note"], &launcher).unwrap();

        let opened = launcher.opened.borrow();
        assert_eq!(opened[0].0, Config::default().editor());
        assert!(opened[0].1.ends_with("p/facts/note.md"));
    }

    #[test]
    fn format_flag_overrides_config() {
        let config = Config {
            default_format: Some(OutputFormat::Json),
            ..Config::default()
        };

        let cli = Cli::try_parse_from(["context", "hello"]).unwrap();
        assert_eq!(resolve_format(&cli, &config), OutputFormat::Json);

        let cli = Cli::try_parse_from(["context", "-f", "text", "hello"]).unwrap();
        assert_eq!(resolve_format(&cli, &config), OutputFormat::Text);
    }
}
