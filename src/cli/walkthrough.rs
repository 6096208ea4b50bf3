//! Guided first-run walkthrough
//!
//! Shows what a typical session looks like, then optionally asks for a
//! project, category and note name and creates them. Answering `exit` at any
//! prompt leaves without writing anything: all answers are collected before
//! the first file is touched.

use anyhow::Result;

use super::prompt::Console;
use super::session::Session;
use crate::domain::{validate_name, Category};
use crate::storage::{ErrorKind, StoreError};

const PREVIEW: &[&str] = &[
    "Welcome to Context Utility!",
    "",
    "Let's walk through how to set up your first project and context file.",
    "",
    "Step 1: Initialize your project",
    "  $ context init my-first-project",
    "  Initialized project at context_data/my-first-project",
    "",
    "Step 2: Create your first context file",
    "  $ context create-context my-first-project facts first-notes",
    "  Created file: context_data/my-first-project/facts/first-notes.md",
    "",
    "Step 3: Edit the file (optional)",
    "  $ context edit-context my-first-project facts first-notes",
    "  (opens in your default editor like nano or VS Code)",
    "",
    "Step 4: View your context files",
    "  $ context list-contexts my-first-project",
    "  facts/",
    "    - first-notes.md",
    "",
    "That's it! You're now ready to work with structured context.",
    "",
];

/// Everything the interactive setup needs before it writes anything
#[derive(Debug, PartialEq, Eq)]
struct Answers {
    project: String,
    category: Category,
    name: String,
}

pub fn run(session: &mut Session<'_>) -> Result<()> {
    for line in PREVIEW {
        session.console.say(line)?;
    }

    if session
        .console
        .confirm("Would you like to create your first project now?", Some(true))?
    {
        session.console.say("")?;
        session.console.say("Launching interactive setup...")?;
        session.console.say("")?;
        interactive(session)
    } else {
        session
            .console
            .say("No problem. You can run this again anytime with `context walkthrough`.")
    }
}

fn interactive(session: &mut Session<'_>) -> Result<()> {
    let Some(answers) = collect(&mut *session.console)? else {
        session.console.say("Exiting walkthrough. No changes made.")?;
        return Ok(());
    };
    session.output.verbose_ctx("walkthrough", &format!("{:?}", answers));

    let Answers {
        project,
        category,
        name,
    } = answers;

    if session.data.project_exists(&project) {
        session
            .console
            .say(&format!("Project '{}' already exists. Skipping init.", project))?;
    } else {
        session.data.init_project(&project)?;
        session
            .console
            .say(&format!("Project '{}' initialized.", project))?;
    }

    let store = session.data.notes(&project)?;
    let path = match store.create(category, &name) {
        Ok(path) => {
            session
                .console
                .say(&format!("Created file: {}", path.display()))?;
            path
        }
        Err(e) if is_already_exists(&e) => {
            let path = store.note_path(category.as_str(), &name)?;
            session.console.say(&format!(
                "File '{}' already exists. Skipping create.",
                path.display()
            ))?;
            path
        }
        Err(e) => return Err(e),
    };

    if session.console.confirm("Do you want to open it now?", Some(true))? {
        let editor = session.config.editor();
        session.launcher.open(&editor, &path)?;
    }

    session.console.say("")?;
    session.console.say("You're ready! Use:")?;
    session
        .console
        .say(&format!("  context list-contexts {}", project))
}

fn is_already_exists(err: &anyhow::Error) -> bool {
    err.downcast_ref::<StoreError>()
        .is_some_and(|e| e.kind() == ErrorKind::AlreadyExists)
}

/// Asks every question in turn; `None` if the user bailed out
fn collect(console: &mut dyn Console) -> Result<Option<Answers>> {
    let project = loop {
        let Some(project) = prompt(
            console,
            "Project name (use dashes or underscores, no spaces)",
        )?
        else {
            return Ok(None);
        };

        if project.contains(' ') {
            console.say("Project names cannot contain spaces.")?;
            console.say("Use dashes or underscores instead, like `my-project` or `client_data`.")?;
            console.say("")?;
        } else if let Err(e) = validate_name(&project) {
            console.say(&e.to_string())?;
        } else {
            break project;
        }
    };

    console.say("Available context types:")?;
    for category in Category::ALL {
        console.say(&format!("  - {}", category))?;
    }

    let mut question = "Choose a context type";
    let category = loop {
        let Some(answer) = prompt(console, question)? else {
            return Ok(None);
        };

        match answer.parse::<Category>() {
            Ok(category) => break category,
            Err(_) => {
                console.say(&format!("'{}' is not a valid type.", answer))?;
                question = "Try again (e.g. facts, goals)";
            }
        }
    };

    let name = loop {
        let Some(name) = prompt(console, "Context file name (without .md)")? else {
            return Ok(None);
        };

        match validate_name(&name) {
            Ok(()) => break name,
            Err(e) => console.say(&e.to_string())?,
        }
    };

    Ok(Some(Answers {
        project,
        category,
        name,
    }))
}

/// Asks one question; `None` on `exit` or end of input
fn prompt(console: &mut dyn Console, question: &str) -> Result<Option<String>> {
    Ok(console
        .ask(question)?
        .filter(|answer| !is_exit(answer)))
}

fn is_exit(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("exit")
}
