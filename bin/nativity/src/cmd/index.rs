//! Index command - export the search index as JSON

use std::{
    path::{Path, PathBuf},
    time::Instant,
};

use color_eyre::eyre::{Result, WrapErr, bail};
use nativity_core::Config;
use nativity_search::{SearchIndexFile, search_items, validate_items};

/// Run the index command.
///
/// Writes the aggregated index to `output`, or to `search.output_file` from
/// the configuration when no path is given.
pub fn run(config_path: &Path, output: Option<&Path>, pretty: bool) -> Result<()> {
    let start = Instant::now();
    tracing::info!(?config_path, ?output, pretty, "Exporting search index");

    let config = Config::load_or_default(config_path).wrap_err("Failed to load configuration")?;
    if !config.search.enabled {
        bail!("Search is disabled in {}", config_path.display());
    }

    let items = search_items();
    let problems = validate_items(items);
    if !problems.is_empty() {
        for problem in &problems {
            tracing::error!(%problem, "Invalid search item");
        }
        bail!("Search index has {} problem(s)", problems.len());
    }

    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(&config.search.output_file));

    let index = SearchIndexFile::new(items.to_vec()).with_site(config.site.base_url.clone());
    let bytes = index
        .write_to_file(&output, pretty)
        .wrap_err_with(|| format!("Failed to write {}", output.display()))?;

    let duration = start.elapsed();

    println!();
    println!("  Search index written");
    println!();
    println!("  Items:    {}", index.items.len());
    println!("  Size:     {bytes} bytes");
    println!("  Output:   {}", output.display());
    println!("  Duration: {:.2}ms", duration.as_secs_f64() * 1000.0);
    println!();

    tracing::info!(items = index.items.len(), bytes, ?duration, "Search index exported");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_written_to_explicit_path() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let output = dir.path().join("index.json");

        run(&dir.path().join("nativity.toml"), Some(output.as_path()), true).expect("export");

        let json = std::fs::read_to_string(&output).expect("read index");
        let index = SearchIndexFile::from_json(&json).expect("parse index");
        assert_eq!(index.items.as_slice(), search_items());
        assert_eq!(index.generated_for.as_deref(), Some("https://nativity-ui.dev"));
    }

    #[test]
    fn test_index_uses_configured_site() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("nativity.toml");
        std::fs::write(
            &config_path,
            "[site]\ntitle = \"Docs\"\nbase_url = \"https://docs.example.com\"\n",
        )
        .expect("write config");
        let output = dir.path().join("out.json");

        run(&config_path, Some(output.as_path()), false).expect("export");

        let index = SearchIndexFile::from_json(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(index.generated_for.as_deref(), Some("https://docs.example.com"));
    }

    #[test]
    fn test_index_into_missing_directory_fails() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let output = dir.path().join("no-such-dir").join("index.json");

        let err = run(&dir.path().join("nativity.toml"), Some(output.as_path()), false).unwrap_err();
        assert!(err.to_string().contains("Failed to write"));
    }
}
