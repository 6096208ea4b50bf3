//! Markdown storage for context notes
//!
//! Notes live at `<project>/<category>/<name>.md`. Creation is restricted to
//! the fixed categories; lookups accept any folder so hand-made directories
//! stay reachable.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;

use super::StoreError;
use crate::domain::{seed_content, validate_name, Category};

/// Notes belonging to a single project directory
pub struct NoteStore {
    project: String,
    dir: PathBuf,
}

impl NoteStore {
    pub(crate) fn new(project: impl Into<String>, dir: impl Into<PathBuf>) -> Self {
        Self {
            project: project.into(),
            dir: dir.into(),
        }
    }

    /// Returns the project directory the store reads from
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of a note file, whether or not it exists
    pub fn note_path(&self, category: &str, name: &str) -> Result<PathBuf> {
        validate_name(category).map_err(StoreError::from)?;
        validate_name(name).map_err(StoreError::from)?;
        Ok(self.dir.join(category).join(format!("{}.md", name)))
    }

    /// Path of an existing note, or `NoteNotFound`
    pub fn existing(&self, category: &str, name: &str) -> Result<PathBuf> {
        let path = self.note_path(category, name)?;
        if !path.is_file() {
            return Err(StoreError::NoteNotFound(path).into());
        }
        Ok(path)
    }

    /// Creates a seeded note and returns its path
    pub fn create(&self, category: Category, name: &str) -> Result<PathBuf> {
        let folder = self.dir.join(category.as_str());
        let path = self.note_path(category.as_str(), name)?;

        if !folder.is_dir() {
            return Err(StoreError::FolderNotFound(folder).into());
        }

        let content = seed_content(name, &Local::now().fixed_offset());

        // create_new so a note appearing after the check is never clobbered
        let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                return Err(StoreError::NoteExists(path).into());
            }
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to create note: {}", path.display()));
            }
        };

        file.write_all(content.as_bytes())
            .with_context(|| format!("Failed to write note: {}", path.display()))?;

        Ok(path)
    }

    /// Reads a note's full content
    pub fn read(&self, category: &str, name: &str) -> Result<String> {
        let path = self.existing(category, name)?;
        fs::read_to_string(&path).with_context(|| format!("Failed to read note: {}", path.display()))
    }

    /// Deletes a note, leaving its category folder in place
    pub fn remove(&self, category: &str, name: &str) -> Result<PathBuf> {
        let path = self.existing(category, name)?;
        fs::remove_file(&path)
            .with_context(|| format!("Failed to delete note: {}", path.display()))?;
        Ok(path)
    }

    /// Sorted note file names in one category folder
    pub fn list(&self, category: &str) -> Result<Vec<String>> {
        validate_name(category).map_err(StoreError::from)?;
        let folder = self.dir.join(category);

        if !folder.is_dir() {
            return Err(StoreError::CategoryNotFound {
                project: self.project.clone(),
                category: category.to_string(),
            }
            .into());
        }

        markdown_files(&folder)
    }

    /// Every non-empty folder with its sorted note file names, folders sorted by name
    pub fn list_all(&self) -> Result<Vec<(String, Vec<String>)>> {
        let mut folders = Vec::new();

        for entry in fs::read_dir(&self.dir)
            .with_context(|| format!("Failed to read directory: {}", self.dir.display()))?
        {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();
            if path.is_dir() {
                folders.push((entry.file_name().to_string_lossy().into_owned(), path));
            }
        }

        folders.sort_by(|a, b| a.0.cmp(&b.0));

        let mut listing = Vec::new();
        for (name, path) in folders {
            let files = markdown_files(&path)?;
            if !files.is_empty() {
                listing.push((name, files));
            }
        }

        Ok(listing)
    }
}

/// Sorted names of `*.md` files directly inside `dir`
fn markdown_files(dir: &Path) -> Result<Vec<String>> {
    let mut files = Vec::new();

    for entry in
        fs::read_dir(dir).with_context(|| format!("Failed to read directory: {}", dir.display()))?
    {
        let entry = entry.context("Failed to read directory entry")?;
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().into_owned();

        // Hidden files are never listed
        if name.starts_with('.') {
            continue;
        }

        if path.is_file() && path.extension().is_some_and(|e| e == "md") {
            files.push(name);
        }
    }

    files.sort();
    Ok(files)
}
