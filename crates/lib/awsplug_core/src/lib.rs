//! # awsplug_core
//!
//! Core logic for the AWS plugin adapter: value coercion, parameter mapping,
//! credential resolution, tag handling and autocomplete filtering.

pub mod autocomplete;
pub mod client;
pub mod config;
pub mod credentials;
pub mod models;
pub mod params;
pub mod parsers;
pub mod path;
pub mod tags;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
