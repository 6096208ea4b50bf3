//! Project management
//!
//! Handles project initialization, removal and access to the note store.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;

use super::{NoteStore, StoreError};
use crate::domain::{validate_name, Category, ProjectMeta};

/// Root directory holding every project
#[derive(Debug, Clone)]
pub struct DataDir {
    root: PathBuf,
}

impl DataDir {
    /// Data root used when nothing else is configured
    pub const DEFAULT: &'static str = "context_data";

    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the data root path
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory of a project, whether or not it exists
    pub fn project_dir(&self, name: &str) -> Result<PathBuf> {
        validate_name(name).map_err(StoreError::from)?;
        Ok(self.root.join(name))
    }

    /// Returns true if the project directory exists
    pub fn project_exists(&self, name: &str) -> bool {
        self.project_dir(name).map(|dir| dir.exists()).unwrap_or(false)
    }

    /// Initializes a new project with every category folder and `meta.json`
    pub fn init_project(&self, name: &str) -> Result<Project> {
        let dir = self.project_dir(name)?;

        if dir.exists() {
            return Err(StoreError::ProjectExists(name.to_string()).into());
        }

        for category in Category::ALL {
            let folder = dir.join(category.as_str());
            fs::create_dir_all(&folder).with_context(|| {
                format!("Failed to create category directory: {}", folder.display())
            })?;
        }

        let project = Project {
            name: name.to_string(),
            dir,
        };

        let meta = ProjectMeta::new(name, Local::now().fixed_offset());
        let json = serde_json::to_string_pretty(&meta).context("Failed to serialize meta.json")?;
        let meta_path = project.meta_path();
        fs::write(&meta_path, json)
            .with_context(|| format!("Failed to write metadata: {}", meta_path.display()))?;

        Ok(project)
    }

    /// Opens an existing project
    pub fn open_project(&self, name: &str) -> Result<Project> {
        let dir = self.project_dir(name)?;

        if !dir.is_dir() {
            return Err(StoreError::ProjectNotFound(name.to_string()).into());
        }

        Ok(Project {
            name: name.to_string(),
            dir,
        })
    }

    /// Recursively removes a project directory
    pub fn remove_project(&self, name: &str) -> Result<PathBuf> {
        let project = self.open_project(name)?;
        fs::remove_dir_all(project.dir())
            .with_context(|| format!("Failed to delete project: {}", project.dir().display()))?;
        Ok(project.dir)
    }

    /// Note store for a project, without checking the project exists
    pub fn notes(&self, project: &str) -> Result<NoteStore> {
        let dir = self.project_dir(project)?;
        Ok(NoteStore::new(project, dir))
    }
}

/// A single context project
#[derive(Debug)]
pub struct Project {
    name: String,
    dir: PathBuf,
}

impl Project {
    /// Returns the project name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the project directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the path of `meta.json`
    pub fn meta_path(&self) -> PathBuf {
        self.dir.join("meta.json")
    }

    /// Reads the metadata descriptor
    pub fn meta(&self) -> Result<ProjectMeta> {
        let path = self.meta_path();
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read metadata: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse metadata: {}", path.display()))
    }

    /// Returns the note store for this project
    pub fn notes(&self) -> NoteStore {
        NoteStore::new(&self.name, &self.dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::ErrorKind;
    use tempfile::TempDir;

    fn data_dir() -> (TempDir, DataDir) {
        let dir = TempDir::new().unwrap();
        let data = DataDir::new(dir.path().join(DataDir::DEFAULT));
        (dir, data)
    }

    #[test]
    fn init_creates_structure() {
        let (_dir, data) = data_dir();
        let project = data.init_project("demo").unwrap();

        for category in Category::ALL {
            assert!(project.dir().join(category.as_str()).is_dir());
        }
        assert!(project.meta_path().is_file());
    }

    #[test]
    fn init_writes_meta() {
        let (_dir, data) = data_dir();
        let project = data.init_project("demo").unwrap();

        let meta = project.meta().unwrap();
        assert_eq!(meta.project, "demo");
        assert_eq!(meta.context_types, Category::ALL.to_vec());

        let raw = fs::read_to_string(project.meta_path()).unwrap();
        assert!(raw.contains("\n  \"project\": \"demo\""));
    }

    #[test]
    fn init_twice_fails_and_keeps_first() {
        let (_dir, data) = data_dir();
        let project = data.init_project("demo").unwrap();
        let before = fs::read_to_string(project.meta_path()).unwrap();

        let err = data.init_project("demo").unwrap_err();
        let store_err = err.downcast_ref::<StoreError>().unwrap();
        assert_eq!(store_err.kind(), ErrorKind::AlreadyExists);
        assert_eq!(fs::read_to_string(project.meta_path()).unwrap(), before);
    }

    #[test]
    fn open_missing_project_fails() {
        let (_dir, data) = data_dir();

        let err = data.open_project("ghost").unwrap_err();
        assert_eq!(err.to_string(), "Project 'ghost' does not exist.");
    }

    #[test]
    fn remove_project_deletes_tree() {
        let (_dir, data) = data_dir();
        let project = data.init_project("demo").unwrap();
        project.notes().create(Category::Facts, "a").unwrap();

        let removed = data.remove_project("demo").unwrap();
        assert!(!removed.exists());
        assert!(!data.project_exists("demo"));
    }

    #[test]
    fn remove_missing_project_fails() {
        let (_dir, data) = data_dir();

        let err = data.remove_project("ghost").unwrap_err();
        let store_err = err.downcast_ref::<StoreError>().unwrap();
        assert_eq!(store_err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn invalid_project_name_rejected() {
        let (_dir, data) = data_dir();

        assert!(data.init_project("../outside").is_err());
        assert!(!data.root().exists());
    }
}
