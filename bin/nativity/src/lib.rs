//! Nativity CLI Library
//!
//! Command implementations for the `nativity` binary, which exercises the
//! documentation site's search index from the terminal.
//!
//! # Modules
//!
//! - [`cmd`] - Command implementations (search, index, components, check)
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use nativity::cmd;
//!
//! // Export the search index next to the site bundle
//! cmd::index::run(Path::new("nativity.toml"), Some(Path::new("public/search-index.json")), false)
//!     .unwrap();
//! ```

pub mod cmd;

pub use nativity_core::Config;
pub use nativity_search::{GroupedItems, SearchItem};

/// Initialize tracing with the specified verbosity level.
///
/// # Arguments
///
/// * `verbose` - Verbosity level (0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE)
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}
