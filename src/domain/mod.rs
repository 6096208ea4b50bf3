//! Domain models for the context CLI
//!
//! Categories, note naming and project metadata, without any I/O concerns.

mod category;
mod meta;
mod note;

pub use category::{Category, InvalidCategory};
pub use meta::ProjectMeta;
pub use note::{format_timestamp, seed_content, title_from_name, validate_name, InvalidName};
