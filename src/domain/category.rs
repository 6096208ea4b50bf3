//! Note categories
//!
//! Every project is split into the same nine folders. The set is closed:
//! notes can only be created in one of these categories.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{0}' is not a valid context type (valid types: {types})", types = Category::valid_names())]
pub struct InvalidCategory(pub String);

/// A fixed note grouping inside a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Facts,
    Decisions,
    Goals,
    Instructions,
    Actions,
    Summaries,
    Archives,
    Personas,
    Timeline,
}

impl Category {
    /// All categories, in the order they are written to `meta.json`
    pub const ALL: [Category; 9] = [
        Category::Facts,
        Category::Decisions,
        Category::Goals,
        Category::Instructions,
        Category::Actions,
        Category::Summaries,
        Category::Archives,
        Category::Personas,
        Category::Timeline,
    ];

    /// Folder name for this category
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Facts => "facts",
            Category::Decisions => "decisions",
            Category::Goals => "goals",
            Category::Instructions => "instructions",
            Category::Actions => "actions",
            Category::Summaries => "summaries",
            Category::Archives => "archives",
            Category::Personas => "personas",
            Category::Timeline => "timeline",
        }
    }

    /// Comma separated list of valid names, for error hints
    pub fn valid_names() -> String {
        Self::ALL
            .iter()
            .map(Category::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = InvalidCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| InvalidCategory(s.to_string()))
    }
}
