//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only sees the [`EntryPolicy`] built
//! from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `GRADEBOOK__<SECTION>__<KEY>`
//! 3. Config file (`--config FILE`, else [`AppConfig::config_path`])
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use gradebook_core::application::EntryPolicy;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Interactive input settings.
    pub input: InputConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Invalid entries allowed in a row before an entry is abandoned.
    pub max_attempts: u32,
    /// Word that ends grade entry.
    pub done_keyword: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: ReportFormat,
}

/// Report rendering chosen by configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Human,
    Json,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            input: InputConfig {
                max_attempts: EntryPolicy::DEFAULT_MAX_ATTEMPTS,
                done_keyword: EntryPolicy::DEFAULT_DONE_KEYWORD.into(),
            },
            output: OutputConfig {
                no_color: false,
                format: ReportFormat::Human,
            },
        }
    }
}

impl AppConfig {
    pub const ENV_PREFIX: &'static str = "GRADEBOOK";

    /// Load configuration: defaults, then the config file, then environment.
    ///
    /// An explicit `config_file` must exist; the default location is optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };
        Self::load_from(&path, required)
    }

    fn load_from(path: &Path, required: bool) -> anyhow::Result<Self> {
        let defaults = config::Config::try_from(&Self::default())
            .context("Failed to encode default configuration")?;

        let settings = config::Config::builder()
            .add_source(defaults)
            .add_source(config::File::from(path).required(required))
            .add_source(
                config::Environment::with_prefix(Self::ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?;

        settings
            .try_deserialize()
            .with_context(|| format!("Invalid configuration in {}", path.display()))
    }

    /// Entry limits for the interactive session.
    pub fn entry_policy(&self) -> EntryPolicy {
        EntryPolicy::new(self.input.max_attempts, self.input.done_keyword.clone())
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.gradebook.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "gradebook", "gradebook")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".gradebook.toml"))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn default_attempts_match_core_policy() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.input.max_attempts, 3);
        assert_eq!(cfg.entry_policy(), EntryPolicy::default());
    }

    #[test]
    fn default_no_color_is_false() {
        assert!(!AppConfig::default().output.no_color);
    }

    #[test]
    fn missing_optional_file_returns_defaults() {
        let cfg = AppConfig::load_from(Path::new("/nonexistent/gradebook.toml"), false).unwrap();
        assert_eq!(cfg.input.done_keyword, "done");
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let path = PathBuf::from("/nonexistent/gradebook.toml");
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn file_overrides_defaults_partially() {
        let file = write_config("[input]\nmax_attempts = 7\n\n[output]\nformat = \"json\"\n");
        let cfg = AppConfig::load(Some(&file.path().to_path_buf())).unwrap();

        assert_eq!(cfg.input.max_attempts, 7);
        assert_eq!(cfg.input.done_keyword, "done");
        assert_eq!(cfg.output.format, ReportFormat::Json);
    }

    #[test]
    fn unknown_format_is_rejected() {
        let file = write_config("[output]\nformat = \"yaml\"\n");
        assert!(AppConfig::load(Some(&file.path().to_path_buf())).is_err());
    }

    #[test]
    fn round_trips_through_toml() {
        let text = toml::to_string_pretty(&AppConfig::default()).unwrap();
        let file = write_config(&text);
        let cfg = AppConfig::load(Some(&file.path().to_path_buf())).unwrap();
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn config_path_is_not_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
