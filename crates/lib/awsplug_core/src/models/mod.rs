//! Domain models shared across the adapter.
//!
//! Wire shapes keep the field names the host and the AWS SDK expect.

pub mod autocomplete;
pub mod aws;
pub mod config;
