//! Project metadata descriptor (`meta.json`)

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::category::Category;
use super::note::format_timestamp;

/// Contents of a project's `meta.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectMeta {
    /// Project name, identical to its directory name
    pub project: String,

    /// When the project was initialized
    #[serde(serialize_with = "serialize_timestamp")]
    pub created: DateTime<FixedOffset>,

    /// Categories the project was created with
    pub context_types: Vec<Category>,
}

impl ProjectMeta {
    /// Describes a new project holding every category
    pub fn new(project: impl Into<String>, created: DateTime<FixedOffset>) -> Self {
        Self {
            project: project.into(),
            created,
            context_types: Category::ALL.to_vec(),
        }
    }
}

fn serialize_timestamp<S>(at: &DateTime<FixedOffset>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&format_timestamp(at))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_lists_every_category() {
        let created = DateTime::parse_from_rfc3339("2025-01-02T03:04:05+00:00").unwrap();
        let meta = ProjectMeta::new("demo", created);

        assert_eq!(meta.project, "demo");
        assert_eq!(meta.context_types.len(), 9);
    }

    #[test]
    fn json_shape() {
        let created = DateTime::parse_from_rfc3339("2025-01-02T03:04:05+00:00").unwrap();
        let meta = ProjectMeta::new("demo", created);

        let value = serde_json::to_value(&meta).unwrap();
        assert_eq!(value["project"], "demo");
        assert_eq!(value["created"], "2025-01-02T03:04:05.000000+00:00");
        assert_eq!(value["context_types"][0], "facts");
        assert_eq!(value["context_types"][8], "timeline");
    }

    #[test]
    fn parses_written_descriptor() {
        let json = r#"{
  "project": "demo",
  "created": "2025-06-01T10:00:00.123456+02:00",
  "context_types": ["facts", "goals"]
}"#;

        let meta: ProjectMeta = serde_json::from_str(json).unwrap();
        assert_eq!(meta.project, "demo");
        assert_eq!(meta.context_types, vec![Category::Facts, Category::Goals]);
    }

    #[test]
    fn created_matches_note_header_format() {
        let created = DateTime::parse_from_rfc3339("2025-03-04T05:06:07.123456789Z").unwrap();
        let meta = ProjectMeta::new("demo", created);

        let value = serde_json::to_value(&meta).unwrap();
        assert_eq!(value["created"], "2025-03-04T05:06:07.123456+00:00");
        assert!(crate::domain::seed_content("n", &created)
            .contains(value["created"].as_str().unwrap()));
    }
}
