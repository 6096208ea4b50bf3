//! Context note model
//!
//! A note is a Markdown file seeded with a title derived from its name
//! and the time it was created. Nothing else is tracked about it.

use chrono::{DateTime, FixedOffset, SecondsFormat};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid name '{0}': names must be a single path component")]
pub struct InvalidName(pub String);

/// Checks that a project or note name maps to exactly one directory entry
pub fn validate_name(name: &str) -> Result<(), InvalidName> {
    let bad = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains('/')
        || name.contains('\\');

    if bad {
        Err(InvalidName(name.to_string()))
    } else {
        Ok(())
    }
}

/// Derives a display title from a note name
///
/// Dashes become spaces, then each run of letters is capitalized on its
/// first letter and lowercased elsewhere. `my-topic` becomes `My Topic`,
/// `bad@name!` becomes `Bad@Name!`.
pub fn title_from_name(name: &str) -> String {
    let mut title = String::with_capacity(name.len());
    let mut prev_alpha = false;

    for ch in name.chars() {
        let ch = if ch == '-' { ' ' } else { ch };

        if ch.is_alphabetic() {
            if prev_alpha {
                title.extend(ch.to_lowercase());
            } else {
                title.extend(ch.to_uppercase());
            }
            prev_alpha = true;
        } else {
            title.push(ch);
            prev_alpha = false;
        }
    }

    title
}

/// Formats a timestamp the way notes and metadata record it
pub fn format_timestamp(at: &DateTime<FixedOffset>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, false)
}

/// Initial content written to a freshly created note
pub fn seed_content(name: &str, created: &DateTime<FixedOffset>) -> String {
    format!(
        "# {}\n\nCreated on {}\n",
        title_from_name(name),
        format_timestamp(created)
    )
}
