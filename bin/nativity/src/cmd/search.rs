//! Search command - query the index from the terminal

use std::{fmt::Write as _, path::Path};

use color_eyre::eyre::{Result, WrapErr, bail};
use nativity_core::Config;
use nativity_search::{GroupedItems, SearchItem, SelectionCursor, grouped_results};

/// Run the search command.
///
/// Prints the results grouped the way the site's search dialog shows them.
/// With `select`, prints only the URL of the row the dialog would open after
/// moving down that many rows.
pub fn run(config_path: &Path, query: &str, json: bool, select: Option<usize>) -> Result<()> {
    tracing::info!(?config_path, query, json, ?select, "Searching");

    let config = Config::load_or_default(config_path).wrap_err("Failed to load configuration")?;
    if !config.search.enabled {
        bail!("Search is disabled in {}", config_path.display());
    }

    let grouped = grouped_results(query);
    tracing::debug!(results = grouped.len(), "Search finished");

    if let Some(steps) = select {
        let Some(item) = pick(&grouped, steps) else {
            bail!("No results found for \"{}\"", query.trim());
        };
        println!("{}", config.url_for(&item.href));
        return Ok(());
    }

    if json {
        let out = serde_json::to_string_pretty(&grouped).wrap_err("Failed to serialize results")?;
        println!("{out}");
    } else {
        print!("{}", render(&grouped, query, config.search.max_results));
    }

    Ok(())
}

/// The row selected after `steps` presses of the down arrow.
pub fn pick(grouped: &GroupedItems, steps: usize) -> Option<&SearchItem> {
    let rows = grouped.flatten();
    let mut cursor = SelectionCursor::new(rows.len());
    cursor.select_by(steps);
    cursor.pick(&rows).copied()
}

/// Render grouped results as text, showing at most `limit` rows (0 = all).
pub fn render(grouped: &GroupedItems, query: &str, limit: usize) -> String {
    let mut out = String::new();

    if !grouped.has_results() {
        let _ = writeln!(out, "No results found for \"{}\"", query.trim());
        return out;
    }

    let mut remaining = if limit == 0 { usize::MAX } else { limit };
    for (heading, items) in grouped.sections() {
        if items.is_empty() || remaining == 0 {
            continue;
        }

        let _ = writeln!(out, "{heading}");
        for item in items.iter().take(remaining) {
            let _ = write!(out, "  {:<24} {}", item.title, item.href);
            if let Some(description) = &item.description {
                let _ = write!(out, "  {description}");
            }
            out.push('\n');
        }
        remaining = remaining.saturating_sub(items.len());
        out.push('\n');
    }

    let total = grouped.len();
    let shown = if limit == 0 { total } else { total.min(limit) };
    let _ = writeln!(out, "{shown} of {total} result(s)");

    out
}
