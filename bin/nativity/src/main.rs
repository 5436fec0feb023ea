//! Nativity CLI
//!
//! Terminal front end for the Nativity UI documentation search index.
//!
//! This is the binary entry point. The library functionality is in `lib.rs`.

use clap::Parser;
use color_eyre::eyre::Result;

/// Command-line interface for Nativity.
#[derive(Parser)]
#[command(
    name = "nativity",
    version,
    about = "Query and export the Nativity UI documentation search index"
)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "nativity.toml")]
    config: std::path::PathBuf,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(clap::Subcommand)]
enum Commands {
    /// Search docs, components, examples and quick links
    Search {
        /// Free-text query (empty lists everything)
        #[arg(default_value = "")]
        query: String,
        /// Print results as JSON
        #[arg(long)]
        json: bool,
        /// Print only the URL of the result N rows down
        #[arg(long, value_name = "N")]
        select: Option<usize>,
    },
    /// Write the search index as JSON
    Index {
        /// Output file (defaults to search.output_file)
        #[arg(short, long)]
        output: Option<std::path::PathBuf>,
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
    /// List catalog components
    Components {
        /// Only show this category
        #[arg(long)]
        category: Option<String>,
        /// Filter by name, description or category
        #[arg(short, long)]
        query: Option<String>,
    },
    /// Validate configuration, catalog and search index
    Check {
        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    nativity::init_tracing(cli.verbose);

    match cli.command {
        Commands::Search {
            query,
            json,
            select,
        } => {
            nativity::cmd::search::run(&cli.config, &query, json, select)?;
        }
        Commands::Index { output, pretty } => {
            nativity::cmd::index::run(&cli.config, output.as_deref(), pretty)?;
        }
        Commands::Components { category, query } => {
            nativity::cmd::components::run(category.as_deref(), query.as_deref())?;
        }
        Commands::Check { strict } => {
            nativity::cmd::check::run(&cli.config, strict)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_cli_search_command_parsing() {
        let args = ["nativity", "search", "toggle", "--json"];
        let cli = Cli::parse_from(args);

        assert_eq!(cli.config, std::path::PathBuf::from("nativity.toml"));
        assert_eq!(cli.verbose, 0);

        match cli.command {
            Commands::Search {
                query,
                json,
                select,
            } => {
                assert_eq!(query, "toggle");
                assert!(json);
                assert!(select.is_none());
            }
            _ => panic!("Expected Search command"),
        }
    }

    #[test]
    fn test_cli_search_without_query() {
        let cli = Cli::parse_from(["nativity", "search", "--select", "2"]);

        match cli.command {
            Commands::Search { query, select, .. } => {
                assert_eq!(query, "");
                assert_eq!(select, Some(2));
            }
            _ => panic!("Expected Search command"),
        }
    }

    #[test]
    fn test_cli_index_command_parsing() {
        let args = ["nativity", "index", "--output", "public/search.json", "--pretty"];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Index { output, pretty } => {
                assert_eq!(output, Some(std::path::PathBuf::from("public/search.json")));
                assert!(pretty);
            }
            _ => panic!("Expected Index command"),
        }
    }

    #[test]
    fn test_cli_components_command_parsing() {
        let args = ["nativity", "components", "--category", "Inputs", "-q", "otp"];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Components { category, query } => {
                assert_eq!(category.as_deref(), Some("Inputs"));
                assert_eq!(query.as_deref(), Some("otp"));
            }
            _ => panic!("Expected Components command"),
        }
    }

    #[test]
    fn test_cli_check_command_parsing() {
        let args = ["nativity", "check", "--strict"];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Check { strict } => {
                assert!(strict);
            }
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn test_cli_verbosity_flags() {
        let cli = Cli::parse_from(["nativity", "-vvv", "check"]);
        assert_eq!(cli.verbose, 3);
    }

    #[test]
    fn test_cli_custom_config_path() {
        let cli = Cli::parse_from(["nativity", "--config", "site.toml", "index"]);
        assert_eq!(cli.config, std::path::PathBuf::from("site.toml"));
    }
}
