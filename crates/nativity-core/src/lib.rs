//! Nativity Core Library
//!
//! Component catalog, site configuration, and error handling shared by the
//! Nativity UI documentation tooling.

pub mod catalog;
pub mod config;
pub mod error;

pub use catalog::{ComponentMeta, Difficulty, ExampleMeta};
pub use crate::config::Config;
pub use error::{CoreError, Result};
