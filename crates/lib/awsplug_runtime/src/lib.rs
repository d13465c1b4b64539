//! # awsplug_runtime
//!
//! Plugin bootstrap: named action and autocomplete handlers behind a single
//! [`Plugin`] that resolves credentials, builds a service client and coerces
//! parameters for every request.

pub mod autocomplete;
pub mod error;
pub mod handler;
pub mod methods;
pub mod plugin;

pub use error::PluginError;
pub use handler::{
    ActionContext, ActionHandler, AutocompleteContext, AutocompleteHandler, ServiceFactory,
};
pub use plugin::{ActionInvocation, MethodRef, Plugin, PluginBuilder};

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
