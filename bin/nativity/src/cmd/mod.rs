//! CLI command implementations.

pub mod check;
pub mod components;
pub mod index;
pub mod search;
