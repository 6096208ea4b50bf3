//! Context note CLI commands

use std::collections::BTreeMap;

use anyhow::Result;

use super::prompt::confirm_or_cancel;
use super::session::Session;
use crate::domain::Category;
use crate::storage::StoreError;

pub fn create(session: &mut Session<'_>, project: &str, category: &str, name: &str) -> Result<()> {
    let output = session.output;

    // Checked before anything touches the filesystem
    let category: Category = category.parse().map_err(StoreError::from)?;

    let store = session.data.notes(project)?;
    let path = store.create(category, name)?;
    output.verbose_ctx("create-context", &format!("Seeded {}", path.display()));

    if output.is_json() {
        output.data(&serde_json::json!({
            "project": project,
            "category": category,
            "name": name,
            "path": path.display().to_string(),
        }));
    } else {
        output.success(&format!("Created file: {}", path.display()));
    }

    Ok(())
}

pub fn delete(
    session: &mut Session<'_>,
    project: &str,
    category: &str,
    name: &str,
    force: bool,
) -> Result<()> {
    let output = session.output;
    let store = session.data.notes(project)?;
    let path = store.existing(category, name)?;

    confirm_or_cancel(
        &mut *session.console,
        force,
        &format!("Are you sure you want to delete '{}'?", path.display()),
    )?;

    store.remove(category, name)?;

    if output.is_json() {
        output.data(&serde_json::json!({
            "deleted": path.display().to_string(),
        }));
    } else {
        output.success(&format!("Deleted file: {}", path.display()));
    }

    Ok(())
}

pub fn edit(session: &mut Session<'_>, project: &str, category: &str, name: &str) -> Result<()> {
    let output = session.output;
    let path = session.data.notes(project)?.existing(category, name)?;

    let editor = session.config.editor();
    output.verbose_ctx("edit-context", &format!("Opening {} with {}", path.display(), editor));

    let status = session.launcher.open(&editor, &path)?;
    if !status.success() {
        output.verbose_ctx(
            "edit-context",
            &format!("Editor exited with code: {:?}", status.code()),
        );
    }

    if output.is_json() {
        output.data(&serde_json::json!({
            "path": path.display().to_string(),
            "editor": editor,
            "exit_code": status.code(),
        }));
    }

    Ok(())
}

pub fn view(
    session: &mut Session<'_>,
    project: &str,
    category: &str,
    name: &str,
    pager: bool,
) -> Result<()> {
    let output = session.output;
    let store = session.data.notes(project)?;
    let path = store.existing(category, name)?;
    let content = store.read(category, name)?;

    if output.is_json() {
        if pager {
            output.verbose_ctx("view-context", "Pager skipped for JSON output");
        }
        output.data(&serde_json::json!({
            "path": path.display().to_string(),
            "content": content,
        }));
        return Ok(());
    }

    if pager {
        let program = session.config.pager();
        output.verbose_ctx("view-context", &format!("Paging through {}", program));

        let status = session.launcher.pipe(&program, &content)?;
        if !status.success() {
            output.verbose_ctx(
                "view-context",
                &format!("Pager exited with code: {:?}", status.code()),
            );
        }
    } else {
        output.line(content.strip_suffix('\n').unwrap_or(&content));
    }

    Ok(())
}

pub fn list(session: &mut Session<'_>, project: &str, category: Option<&str>) -> Result<()> {
    let output = session.output;
    let project = session.data.open_project(project)?;
    let store = project.notes();

    let listing = match category {
        Some(category) => {
            let files = store.list(category)?;
            if files.is_empty() && !output.is_json() {
                output.line(&format!("No context files found in '{}/'", category));
                return Ok(());
            }
            vec![(category.to_string(), files)]
        }
        None => store.list_all()?,
    };

    output.verbose_ctx(
        "list-contexts",
        &format!("{} non-empty folder(s) in {}", listing.len(), project.dir().display()),
    );

    if output.is_json() {
        let contexts: BTreeMap<_, _> = listing.into_iter().collect();
        output.data(&serde_json::json!({
            "project": project.name(),
            "contexts": contexts,
        }));
    } else if listing.is_empty() {
        output.line(&format!(
            "No context files found in project '{}'.",
            project.name()
        ));
    } else {
        for (folder, files) in &listing {
            output.line(&format!("{}/", folder));
            for file in files {
                output.line(&format!("  - {}", file));
            }
        }
    }

    Ok(())
}
