//! Plugin error types.

use thiserror::Error;

use awsplug_core::autocomplete::AutocompleteError;
use awsplug_core::client::ServiceError;
use awsplug_core::config::ConfigError;
use awsplug_core::credentials::CredentialsError;
use awsplug_core::params::ParamsError;
use awsplug_core::parsers::ParseError;
use awsplug_core::tags::TagsError;

/// Convenience alias for handler return types.
pub type PluginResult<T> = Result<T, PluginError>;

/// Every failure a plugin call can surface to the host.
#[derive(Debug, Error)]
pub enum PluginError {
    #[error(transparent)]
    Params(#[from] ParamsError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Credentials(#[from] CredentialsError),

    #[error(transparent)]
    Tags(#[from] TagsError),

    #[error(transparent)]
    Autocomplete(#[from] AutocompleteError),

    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error("No handler registered under \"{0}\"")]
    UnknownHandler(String),

    #[error("Handler \"{0}\" is registered more than once")]
    DuplicateHandler(String),

    #[error("Handler \"{0}\" needs a service client but none was constructed")]
    ClientUnavailable(String),
}
