//! Project CLI commands

use anyhow::Result;

use super::prompt::confirm_or_cancel;
use super::session::Session;
use crate::domain::format_timestamp;

pub fn init(session: &mut Session<'_>, name: &str) -> Result<()> {
    let output = session.output;
    output.verbose_ctx(
        "init",
        &format!("Data root: {}", session.data.root().display()),
    );

    let project = session.data.init_project(name)?;

    if output.is_json() {
        let meta = project.meta()?;
        output.data(&serde_json::json!({
            "project": meta.project,
            "path": project.dir().display().to_string(),
            "created": format_timestamp(&meta.created),
            "context_types": meta.context_types,
        }));
    } else {
        output.success(&format!(
            "Initialized project at {}",
            project.dir().display()
        ));
    }

    Ok(())
}

pub fn delete(session: &mut Session<'_>, name: &str, force: bool) -> Result<()> {
    let output = session.output;
    let project = session.data.open_project(name)?;
    output.verbose_ctx(
        "delete-project",
        &format!("Removing {} (force={})", project.dir().display(), force),
    );

    confirm_or_cancel(
        &mut *session.console,
        force,
        &format!(
            "Are you sure you want to delete the project '{}' and all its data?",
            name
        ),
    )?;

    let removed = session.data.remove_project(name)?;

    if output.is_json() {
        output.data(&serde_json::json!({
            "deleted": name,
            "path": removed.display().to_string(),
        }));
    } else {
        output.success(&format!("Deleted project '{}' and all contents.", name));
    }

    Ok(())
}
