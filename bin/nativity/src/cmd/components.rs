//! Components command - browse the component catalog

use std::fmt::Write as _;

use color_eyre::eyre::{Result, bail};
use nativity_core::{
    ComponentMeta,
    catalog::{self, categories, filter_components, group_by_category},
};

/// Run the components command.
///
/// Lists catalog components grouped by category, optionally narrowed to one
/// category and/or a picker query.
pub fn run(category: Option<&str>, query: Option<&str>) -> Result<()> {
    tracing::info!(?category, ?query, "Listing components");

    let selected = select(category, query)?;
    print!("{}", render(&selected));

    Ok(())
}

/// Components matching the optional category and query.
pub fn select(
    category: Option<&str>,
    query: Option<&str>,
) -> Result<Vec<&'static ComponentMeta>> {
    let mut selected = filter_components(query.unwrap_or(""));

    if let Some(category) = category {
        let Some(name) = categories()
            .into_iter()
            .find(|c| c.eq_ignore_ascii_case(category))
        else {
            bail!(
                "Unknown category \"{category}\" (expected one of: {})",
                categories().join(", ")
            );
        };
        selected.retain(|c| c.category == name);
    }

    Ok(selected)
}

/// Render components grouped by category.
pub fn render(selected: &[&ComponentMeta]) -> String {
    let mut out = String::new();

    if selected.is_empty() {
        out.push_str("No components found\n");
        return out;
    }

    for (category, members) in group_by_category(selected) {
        let _ = writeln!(out, "{category}");
        for c in members {
            let mut flags = String::new();
            if c.is_new {
                flags.push_str(" [new]");
            }
            if c.is_stylish {
                flags.push_str(" [stylish]");
            }
            let _ = writeln!(out, "  {:<18} {}{flags}", c.name, c.description);
        }
        out.push('\n');
    }

    let _ = writeln!(
        out,
        "{} of {} component(s)",
        selected.len(),
        catalog::components().len()
    );
    out
}
