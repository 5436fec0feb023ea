//! Check command - validate configuration, catalog and search index

use std::path::Path;

use color_eyre::eyre::{Result, bail};
use nativity_core::{Config, CoreError, catalog};
use nativity_search::{search_items, synonym_slugs, validate_items};

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Run the check command.
pub fn run(config_path: &Path, strict: bool) -> Result<()> {
    tracing::info!(?config_path, strict, "Checking configuration and search index");

    let result = validate(config_path);

    println!();
    println!("Summary:");
    println!("  Errors:   {}", result.errors.len());
    println!("  Warnings: {}", result.warnings.len());

    if result.has_errors() {
        println!();
        println!("Errors:");
        for err in &result.errors {
            println!("  ✗ {err}");
        }
    }

    if result.has_warnings() {
        println!();
        println!("Warnings:");
        for warn in &result.warnings {
            println!("  ⚠ {warn}");
        }
    }

    if result.has_errors() {
        bail!("Validation failed with {} error(s)", result.errors.len());
    }

    if strict && result.has_warnings() {
        bail!(
            "Validation failed with {} warning(s) (strict mode)",
            result.warnings.len()
        );
    }

    println!();
    println!("✓ All checks passed");

    Ok(())
}

/// Collect every problem without printing.
pub fn validate(config_path: &Path) -> ValidationResult {
    let mut result = ValidationResult::default();

    match Config::load(config_path) {
        Ok(config) => check_config_values(&config, &mut result),
        Err(e) if e.is_missing_config() => {
            result.add_warning(format!(
                "{} not found, defaults will be used",
                config_path.display()
            ));
        }
        Err(e) => result.add_error(config_error_message(&e)),
    }

    check_catalog(&mut result);

    for problem in validate_items(search_items()) {
        result.add_error(problem);
    }

    tracing::debug!(
        errors = result.errors.len(),
        warnings = result.warnings.len(),
        "Validation finished"
    );

    result
}

fn config_error_message(err: &CoreError) -> String {
    match std::error::Error::source(err) {
        Some(source) => format!("{err}: {source}"),
        None => err.to_string(),
    }
}

fn check_config_values(config: &Config, result: &mut ValidationResult) {
    if !config.search.enabled {
        result.add_warning("Search is disabled");
    }

    if !config.site.base_url.starts_with("http://") && !config.site.base_url.starts_with("https://")
    {
        result.add_warning(format!(
            "site.base_url should be an absolute URL: {}",
            config.site.base_url
        ));
    }

    if !config.search.output_file.ends_with(".json") {
        result.add_warning(format!(
            "search.output_file should be a .json file: {}",
            config.search.output_file
        ));
    }
}

fn check_catalog(result: &mut ValidationResult) {
    for slug in synonym_slugs() {
        if catalog::component_by_slug(slug).is_none() {
            result.add_warning(format!("Synonyms listed for unknown component: {slug}"));
        }
    }

    for example in catalog::examples() {
        for name in example.components {
            if !catalog::components().iter().any(|c| c.name == *name) {
                result.add_error(format!(
                    "Example {} uses unknown component: {name}",
                    example.id
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_built_in_catalog_is_clean() {
        let mut result = ValidationResult::default();
        check_catalog(&mut result);
        assert!(!result.has_errors());
        assert!(!result.has_warnings());
    }

    #[test]
    fn test_missing_config_is_a_warning() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let result = validate(&dir.path().join("nativity.toml"));

        assert!(!result.has_errors());
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].contains("defaults will be used"));

        assert!(run(&dir.path().join("nativity.toml"), false).is_ok());
        assert!(run(&dir.path().join("nativity.toml"), true).is_err());
    }

    #[test]
    fn test_config_values() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("nativity.toml");
        std::fs::write(
            &config_path,
            "[site]\ntitle = \"Docs\"\nbase_url = \"docs.local\"\n\n[search]\nenabled = false\noutput_file = \"index.txt\"\n",
        )
        .expect("write");

        let result = validate(&config_path);
        assert!(!result.has_errors());
        assert_eq!(result.warnings.len(), 3);
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("nativity.toml");
        std::fs::write(&config_path, "[site]\ntitle = \"\"\n").expect("write");

        let result = validate(&config_path);
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].contains("title cannot be empty"));
        assert!(run(&config_path, false).is_err());
    }
}
