//! Site configuration management.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Main configuration structure, read from `nativity.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Site-wide settings.
    #[serde(default)]
    pub site: SiteConfig,

    /// Search settings.
    #[serde(default)]
    pub search: SearchConfig,
}

/// Site-wide configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site title.
    #[serde(default = "default_title")]
    pub title: String,

    /// Base URL for the site (e.g., "https://nativity-ui.dev").
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// Search configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Whether search is enabled.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// File name of the exported JSON index.
    #[serde(default = "default_output_file")]
    pub output_file: String,

    /// Maximum number of results shown by the CLI (0 = unlimited).
    #[serde(default)]
    pub max_results: usize,
}

fn default_title() -> String {
    "Nativity UI".to_string()
}

fn default_base_url() -> String {
    "https://nativity-ui.dev".to_string()
}

fn default_true() -> bool {
    true
}

fn default_output_file() -> String {
    "search-index.json".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            base_url: default_base_url(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            output_file: default_output_file(),
            max_results: 0,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            CoreError::config_with_source(
                format!("Failed to parse config file: {}", path.display()),
                e,
            )
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `NATIVITY__SECTION__KEY` environment overrides.
    pub fn load_with_env(path: &Path) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(config::Environment::with_prefix("NATIVITY").separator("__"))
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Load the file if present, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        match Self::load(path) {
            Ok(config) => Ok(config),
            Err(e) if e.is_missing_config() => {
                tracing::debug!(path = %path.display(), "No configuration file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(e),
        }
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<()> {
        if self.site.title.is_empty() {
            return Err(CoreError::config("site.title cannot be empty"));
        }

        if self.site.base_url.is_empty() {
            return Err(CoreError::config("site.base_url cannot be empty"));
        }

        if self.site.base_url.ends_with('/') {
            tracing::warn!("site.base_url should not have a trailing slash");
        }

        Ok(())
    }

    /// Get the full URL for a site path.
    pub fn url_for(&self, path: &str) -> String {
        let base = self.site.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn create_test_config() -> String {
        r#"
[site]
title = "Nativity Docs"
base_url = "https://docs.example.com"

[search]
enabled = false
output_file = "index.json"
max_results = 12
"#
        .to_string()
    }

    #[test]
    fn test_load_config() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("nativity.toml");
        let mut file = std::fs::File::create(&config_path).expect("create file");
        file.write_all(create_test_config().as_bytes())
            .expect("write");

        let config = Config::load(&config_path).expect("load config");

        assert_eq!(config.site.title, "Nativity Docs");
        assert_eq!(config.site.base_url, "https://docs.example.com");
        assert!(!config.search.enabled);
        assert_eq!(config.search.output_file, "index.json");
        assert_eq!(config.search.max_results, 12);
    }

    #[test]
    fn test_config_defaults() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("nativity.toml");
        std::fs::write(&config_path, "[site]\ntitle = \"Minimal\"\n").expect("write");

        let config = Config::load(&config_path).expect("load config");

        assert_eq!(config.site.title, "Minimal");
        assert_eq!(config.site.base_url, "https://nativity-ui.dev");
        assert!(config.search.enabled);
        assert_eq!(config.search.output_file, "search-index.json");
        assert_eq!(config.search.max_results, 0);
    }

    #[test]
    fn test_load_or_default_without_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config = Config::load_or_default(&dir.path().join("absent.toml")).expect("defaults");
        assert_eq!(config.site.title, "Nativity UI");
        assert!(config.search.enabled);
    }

    #[test]
    fn test_load_or_default_keeps_parse_errors() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("nativity.toml");
        std::fs::write(&config_path, "[site\ntitle = ").expect("write");

        let result = Config::load_or_default(&config_path);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Failed to parse"));
    }

    #[test]
    fn test_url_for() {
        let config = Config::default();

        assert_eq!(
            config.url_for("/docs/components/button"),
            "https://nativity-ui.dev/docs/components/button"
        );
        assert_eq!(config.url_for("docs"), "https://nativity-ui.dev/docs");
    }

    #[test]
    fn test_config_validation_empty_title() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("nativity.toml");
        std::fs::write(&config_path, "[site]\ntitle = \"\"\n").expect("write");

        let result = Config::load(&config_path);
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("title cannot be empty")
        );
    }

    #[test]
    fn test_config_not_found() {
        let result = Config::load(Path::new("/nonexistent/nativity.toml"));
        let err = result.unwrap_err();
        assert!(err.to_string().contains("not found"));
        assert!(matches!(
            &err,
            CoreError::NotFound { path } if path == Path::new("/nonexistent/nativity.toml")
        ));
    }
}
