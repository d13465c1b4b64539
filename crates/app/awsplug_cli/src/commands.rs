use std::path::Path;

use serde_json::Value;

use awsplug_core::autocomplete::regions::{list_regions, region_label};
use awsplug_core::config::PluginConfig;
use awsplug_core::models::aws::CredentialLabels;
use awsplug_core::params::{raw_values, read_action_arguments};
use awsplug_core::parsers::resolve_parser;
use awsplug_core::tags::build_tag_specification;

use crate::Result;

pub fn regions(query: &str) -> Result<Value> {
    Ok(serde_json::to_value(list_regions(query))?)
}

pub fn region(region_id: &str) -> Result<String> {
    Ok(region_label(region_id)?.to_string())
}

pub fn coerce(type_tag: &str, raw: &str, as_json: bool) -> Result<Value> {
    let parser = resolve_parser(type_tag)?;
    let value = if as_json {
        serde_json::from_str(raw)?
    } else {
        Value::String(raw.to_string())
    };
    Ok(parser.coerce(&value)?)
}

pub fn method_arguments(config: &Path, method: &str, params: &str) -> Result<Value> {
    let config = PluginConfig::load(config)?;
    let definition = config.method(method)?;
    let raw = raw_values(&serde_json::from_str(params)?)?;
    let parsed = read_action_arguments(definition, &raw, &CredentialLabels::default())?;
    log::debug!("Coerced {} arguments for {method}", parsed.len());
    Ok(Value::Object(parsed))
}

pub fn tags(resource_type: &str, tags: &str) -> Result<Value> {
    let specs = build_tag_specification(resource_type, &Value::String(tags.to_string()))?;
    Ok(serde_json::to_value(specs)?)
}
