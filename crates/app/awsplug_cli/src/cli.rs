use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "awsplug", version, about = "AWS plugin adapter tooling")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the version.
    Version,

    /// List regions whose "<id> - <label>" matches every query word.
    Regions {
        #[arg(default_value = "")]
        query: String,
    },

    /// Print the label of a region id.
    RegionLabel { region_id: String },

    /// Coerce one value with the parser for a type tag.
    Coerce {
        #[arg(long = "type", value_name = "TAG")]
        type_tag: String,

        /// Read VALUE as JSON instead of a plain string.
        #[arg(long)]
        json: bool,

        value: String,
    },

    /// Coerce a method's arguments against the method catalog.
    Args {
        /// Path to the plugin's config.json.
        #[arg(long, env = "AWSPLUG_CONFIG")]
        config: PathBuf,

        #[arg(long)]
        method: String,

        /// Raw parameters: a JSON object or a list of {name, type, value}.
        #[arg(long, default_value = "{}")]
        params: String,
    },

    /// Build a TagSpecifications list for one resource type.
    Tags {
        #[arg(long)]
        resource_type: String,

        /// `key=value` lines or a JSON tags value.
        tags: String,
    },
}
