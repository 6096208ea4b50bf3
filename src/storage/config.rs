//! Configuration handling for the context CLI
//!
//! Configuration is optional and stored in `~/.config/context-cli/config.toml`
//! (platform dependent), or wherever `$CONTEXT_CONFIG` points.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Output format for commands
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// User configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding all projects (default `context_data`)
    pub data_dir: Option<PathBuf>,

    /// Editor used when `$EDITOR` is unset
    pub editor: Option<String>,

    /// Pager used when `$PAGER` is unset
    pub pager: Option<String>,

    /// Output format used when `--format` is not given
    pub default_format: Option<OutputFormat>,
}

impl Config {
    /// Environment variable overriding the config file location
    pub const PATH_ENV: &'static str = "CONTEXT_CONFIG";

    pub const DEFAULT_EDITOR: &'static str = "nano";
    pub const DEFAULT_PAGER: &'static str = "less";

    /// Returns the config file path, if one can be determined
    pub fn path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(Self::PATH_ENV).filter(|p| !p.is_empty()) {
            return Some(PathBuf::from(path));
        }

        ProjectDirs::from("dev", "context", "context-cli")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Loads configuration from the default location, falling back to defaults
    pub fn load() -> Result<Self> {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Loads configuration from a specific file; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        Self::parse(&content)
            .with_context(|| format!("Failed to load config: {}", path.display()))
    }

    /// Parses configuration from TOML
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Data root: explicit override, then config, then `context_data`
    pub fn data_dir(&self, explicit: Option<&Path>) -> PathBuf {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| self.data_dir.clone())
            .unwrap_or_else(|| PathBuf::from(super::DataDir::DEFAULT))
    }

    /// Editor program: `$EDITOR`, then config, then `nano`
    pub fn editor(&self) -> String {
        resolve_program(
            std::env::var("EDITOR").ok(),
            self.editor.as_deref(),
            Self::DEFAULT_EDITOR,
        )
    }

    /// Pager program: `$PAGER`, then config, then `less`
    pub fn pager(&self) -> String {
        resolve_program(
            std::env::var("PAGER").ok(),
            self.pager.as_deref(),
            Self::DEFAULT_PAGER,
        )
    }
}

/// Picks the first non-blank of environment value, configured value, fallback
fn resolve_program(env: Option<String>, configured: Option<&str>, fallback: &str) -> String {
    env.filter(|v| !v.trim().is_empty())
        .or_else(|| {
            configured
                .filter(|v| !v.trim().is_empty())
                .map(str::to_string)
        })
        .unwrap_or_else(|| fallback.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config() {
        let config = Config::default();

        assert_eq!(config.data_dir(None), PathBuf::from("context_data"));
        assert_eq!(config.default_format, None);
    }

    #[test]
    fn parse_config() {
        let toml = r#"
data_dir = "/tmp/notes"
editor = "code"
pager = "more"
default_format = "json"
"#;

        let config = Config::parse(toml).unwrap();
        assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/notes")));
        assert_eq!(config.editor.as_deref(), Some("code"));
        assert_eq!(config.pager.as_deref(), Some("more"));
        assert_eq!(config.default_format, Some(OutputFormat::Json));
    }

    #[test]
    fn parse_rejects_bad_toml() {
        let err = Config::parse("editor = [").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn explicit_data_dir_wins() {
        let config = Config {
            data_dir: Some(PathBuf::from("from-config")),
            ..Config::default()
        };

        assert_eq!(config.data_dir(None), PathBuf::from("from-config"));
        assert_eq!(
            config.data_dir(Some(Path::new("from-flag"))),
            PathBuf::from("from-flag")
        );
    }

    #[test]
    fn load_missing_file_is_default() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "pager = \"most\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.pager.as_deref(), Some("most"));
    }

    #[test]
    fn program_resolution_order() {
        assert_eq!(
            resolve_program(Some("vim".into()), Some("code"), "nano"),
            "vim"
        );
        assert_eq!(resolve_program(None, Some("code"), "nano"), "code");
        assert_eq!(resolve_program(Some("  ".into()), None, "nano"), "nano");
        assert_eq!(resolve_program(None, Some(""), "less"), "less");
    }
}
