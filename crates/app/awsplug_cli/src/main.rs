// Import and re-export the `error` module
pub use self::error::{Error, Result};
mod error;

use clap::Parser;
use cli::{Cli, Commands};
use serde_json::Value;

mod cli;
mod commands;
mod logging;

fn main() -> Result<()> {
    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> Result<()> {
    logging::init()?;

    let args = Cli::parse();

    match &args.command {
        Commands::Version => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        }
        Commands::Regions { query } => print_json(&commands::regions(query)?)?,
        Commands::RegionLabel { region_id } => println!("{}", commands::region(region_id)?),
        Commands::Coerce {
            type_tag,
            json,
            value,
        } => print_json(&commands::coerce(type_tag, value, *json)?)?,
        Commands::Args {
            config,
            method,
            params,
        } => print_json(&commands::method_arguments(config, method, params)?)?,
        Commands::Tags {
            resource_type,
            tags,
        } => print_json(&commands::tags(resource_type, tags)?)?,
    }

    Ok(())
}

fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
