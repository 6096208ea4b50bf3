//! Context CLI - Markdown context notes grouped into projects
//!
//! Each project is a directory with nine fixed category folders (facts,
//! decisions, goals, ...) and a `meta.json` descriptor. Notes are plain
//! Markdown files that can be created, edited in `$EDITOR`, viewed, listed
//! and deleted from the command line.

pub mod domain;
pub mod storage;
pub mod cli;

pub use domain::{Category, ProjectMeta};
pub use storage::{DataDir, NoteStore, Project, StoreError};
