use thiserror::Error;

use awsplug_core::autocomplete::AutocompleteError;
use awsplug_core::config::ConfigError;
use awsplug_core::params::ParamsError;
use awsplug_core::parsers::ParseError;
use awsplug_core::tags::TagsError;
use awsplug_runtime::PluginError;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO::{:?}: {}", .0, .0)]
    Io(#[from] std::io::Error),

    #[error("Json: {}", .0)]
    Json(#[from] serde_json::Error),

    #[error("FlexiLogger::{:?}: {}", .0, .0)]
    FlexiLogger(#[from] flexi_logger::FlexiLoggerError),

    #[error(transparent)]
    Plugin(#[from] PluginError),
}

macro_rules! via_plugin_error {
    ($($source:ty),* $(,)?) => {
        $(
            impl From<$source> for Error {
                fn from(e: $source) -> Self {
                    Error::Plugin(e.into())
                }
            }
        )*
    };
}

via_plugin_error!(ParseError, ParamsError, ConfigError, TagsError, AutocompleteError);
