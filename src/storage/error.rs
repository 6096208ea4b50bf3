//! Errors raised by the project and note stores

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::{InvalidCategory, InvalidName};

/// Broad classification of a [`StoreError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    AlreadyExists,
    InvalidCategory,
    InvalidName,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Project '{0}' does not exist.")]
    ProjectNotFound(String),

    #[error("Project '{0}' already exists.")]
    ProjectExists(String),

    #[error("The folder '{}' does not exist. Did you run `init`?", .0.display())]
    FolderNotFound(PathBuf),

    #[error("Context type '{category}' does not exist in project '{project}'.")]
    CategoryNotFound { project: String, category: String },

    #[error("File '{}' does not exist.", .0.display())]
    NoteNotFound(PathBuf),

    #[error("File '{}' already exists.", .0.display())]
    NoteExists(PathBuf),

    #[error(transparent)]
    InvalidCategory(#[from] InvalidCategory),

    #[error(transparent)]
    InvalidName(#[from] InvalidName),
}

impl StoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            StoreError::ProjectNotFound(_)
            | StoreError::FolderNotFound(_)
            | StoreError::CategoryNotFound { .. }
            | StoreError::NoteNotFound(_) => ErrorKind::NotFound,
            StoreError::ProjectExists(_) | StoreError::NoteExists(_) => ErrorKind::AlreadyExists,
            StoreError::InvalidCategory(_) => ErrorKind::InvalidCategory,
            StoreError::InvalidName(_) => ErrorKind::InvalidName,
        }
    }
}
