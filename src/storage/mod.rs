//! # Storage Layer
//!
//! Plain files under a data root, readable and editable by hand.
//!
//! ## Layout
//!
//! ```text
//! context_data/
//! └── my-project/
//!     ├── meta.json             # Project descriptor
//!     ├── facts/
//!     │   └── first-notes.md    # Context notes
//!     ├── decisions/
//!     └── ...                   # One folder per category
//! ```
//!
//! ## Key Types
//!
//! - [`DataDir`] - The data root; creates, opens and removes projects
//! - [`Project`] - An existing project and its metadata
//! - [`NoteStore`] - Create/read/delete/list notes in a project
//! - [`Config`] - Optional user configuration

mod config;
mod error;
mod notes;
mod project;

pub use config::{Config, ConfigError, OutputFormat};
pub use error::{ErrorKind, StoreError};
pub use notes::NoteStore;
pub use project::{DataDir, Project};
