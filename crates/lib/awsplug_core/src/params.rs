// @awa-component: PRM-ParameterMapping
//
//! Parameter mapping: raw host parameters to coerced parameter sets.
//!
//! Two entry points:
//! - [`map_parameters`] for autocomplete calls, where every raw entry carries
//!   its own type tag.
//! - [`read_action_arguments`] for action calls, where the method catalog
//!   supplies types, defaults and required flags.
//!
//! Inside [`parse_method_parameter`] a value is absent only when it is nil;
//! `""`, `0` and `false` are values. Action arguments are cleaned of nil and
//! empty entries first, so a blank field counts as not sent.

use serde_json::{Map, Value, json};
use thiserror::Error;

use crate::config::{ConfigError, MethodDefinition, ParameterDefinition, PluginConfig};
use crate::credentials::remove_credentials;
use crate::models::aws::CredentialLabels;
use crate::parsers::{ParseError, resolve_parser};

/// Coerced parameters keyed by name.
pub type ParsedParameters = Map<String, Value>;

/// Parameter mapping errors.
#[derive(Debug, Error)]
pub enum ParamsError {
    #[error("Failed to map parameters to object - params provided are not an array")]
    NotAnArray,

    #[error("Failed to map parameters to object - every item of params array need to be an object")]
    EntryNotAnObject,

    #[error("Failed to map one of parameters to object - `name` field is required")]
    MissingName,

    #[error(
        "Failed to map one of parameters to object - either `type` or `valueType` field is required"
    )]
    MissingType,

    #[error("Failed to read parameters - expected an object or an array of parameters")]
    UnsupportedShape,

    #[error("Missing required \"{0}\" value")]
    MissingRequired(String),

    #[error("Invalid value for \"{name}\": {source}")]
    InvalidValue {
        name: String,
        #[source]
        source: ParseError,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// One raw value handed over by the host.
#[derive(Debug, Clone, PartialEq)]
pub struct RawParameter {
    pub name: String,
    /// Taken from `type`, or `valueType` for plugin settings.
    pub type_tag: String,
    pub value: Value,
}

impl RawParameter {
    pub fn new(name: impl Into<String>, type_tag: impl Into<String>, value: Value) -> Self {
        Self {
            name: name.into(),
            type_tag: type_tag.into(),
            value,
        }
    }

    /// Validate the structure of one host entry.
    pub fn from_entry(entry: &Value) -> Result<Self, ParamsError> {
        let fields = entry.as_object().ok_or(ParamsError::EntryNotAnObject)?;
        let name = fields
            .get("name")
            .and_then(Value::as_str)
            .ok_or(ParamsError::MissingName)?;
        let type_tag = ["type", "valueType"]
            .iter()
            .find_map(|key| fields.get(*key).and_then(Value::as_str))
            .ok_or(ParamsError::MissingType)?;
        let value = fields.get("value").cloned().unwrap_or(Value::Null);
        Ok(Self::new(name, type_tag, value))
    }

    /// The host wire shape of this entry.
    pub fn to_entry(&self) -> Value {
        json!({ "name": self.name, "type": self.type_tag, "value": self.value })
    }
}

/// Validate a host parameter list without coercing any values.
pub fn raw_parameters(params: &Value) -> Result<Vec<RawParameter>, ParamsError> {
    params
        .as_array()
        .ok_or(ParamsError::NotAnArray)?
        .iter()
        .map(RawParameter::from_entry)
        .collect()
}

/// Coerce raw parameters by their own type tags. Nil values contribute no key.
pub fn coerce_parameters(params: &[RawParameter]) -> Result<ParsedParameters, ParamsError> {
    let mut parsed = ParsedParameters::new();
    for param in params {
        if param.value.is_null() {
            continue;
        }
        let value = resolve_parser(&param.type_tag)
            .and_then(|parser| parser.coerce(&param.value))
            .map_err(|source| ParamsError::InvalidValue {
                name: param.name.clone(),
                source,
            })?;
        parsed.insert(param.name.clone(), value);
    }
    Ok(parsed)
}

/// Validate and coerce a host parameter list in one step.
pub fn map_parameters(params: &Value) -> Result<ParsedParameters, ParamsError> {
    coerce_parameters(&raw_parameters(params)?)
}

/// Read raw values by name from either a plain object or a parameter list.
///
/// List entries only need a `name`; their values are left uncoerced.
pub fn raw_values(params: &Value) -> Result<Map<String, Value>, ParamsError> {
    match params {
        Value::Null => Ok(Map::new()),
        Value::Object(map) => Ok(map.clone()),
        Value::Array(entries) => entries
            .iter()
            .map(|entry| {
                let fields = entry.as_object().ok_or(ParamsError::EntryNotAnObject)?;
                let name = fields
                    .get("name")
                    .and_then(Value::as_str)
                    .ok_or(ParamsError::MissingName)?;
                let value = fields.get("value").cloned().unwrap_or(Value::Null);
                Ok((name.to_string(), value))
            })
            .collect(),
        _ => Err(ParamsError::UnsupportedShape),
    }
}

/// Resolve one method parameter: value → default → required check → parser.
pub fn parse_method_parameter(
    definition: &ParameterDefinition,
    value: Option<&Value>,
) -> Result<Option<Value>, ParamsError> {
    let resolved = value
        .filter(|v| !v.is_null())
        .or_else(|| definition.default.as_ref().filter(|v| !v.is_null()));

    match resolved {
        None if definition.required => Err(ParamsError::MissingRequired(definition.name.clone())),
        None => Ok(None),
        Some(raw) => definition
            .parser()
            .coerce(raw)
            .map(Some)
            .map_err(|source| ParamsError::InvalidValue {
                name: definition.name.clone(),
                source,
            }),
    }
}

/// Coerce an action's arguments against its method definition.
///
/// Blank host values are dropped before definitions apply, so they fall back
/// to defaults and fail required checks. Undeclared parameters pass through
/// untouched; empty results and the credential labels are dropped from the
/// returned set.
pub fn read_action_arguments(
    method: &MethodDefinition,
    params: &Map<String, Value>,
    labels: &CredentialLabels,
) -> Result<ParsedParameters, ParamsError> {
    let sent = remove_undefined_and_empty(params);
    let mut values = sent.clone();
    for definition in &method.params {
        match parse_method_parameter(definition, sent.get(&definition.name))? {
            Some(value) => {
                values.insert(definition.name.clone(), value);
            }
            None => {
                values.remove(&definition.name);
            }
        }
    }
    Ok(remove_credentials(&remove_undefined_and_empty(&values), labels))
}

/// Build the arguments for calling `method_name` from another method's
/// parameters. Keys the target method does not declare are dropped;
/// `additional` wins over `params` on conflicts.
pub fn prepare_parameters_for_another_method_call(
    config: &PluginConfig,
    method_name: &str,
    params: &Map<String, Value>,
    additional: &Map<String, Value>,
) -> Result<ParsedParameters, ParamsError> {
    let method = config.method(method_name)?;

    let mut merged = params.clone();
    merged.extend(additional.iter().map(|(k, v)| (k.clone(), v.clone())));

    let mut prepared = ParsedParameters::new();
    for (key, value) in &merged {
        let Some(definition) = method.param(key) else {
            continue;
        };
        if let Some(parsed) = parse_method_parameter(definition, Some(value))? {
            prepared.insert(key.clone(), parsed);
        }
    }
    Ok(prepared)
}

/// Drop keys whose value is nil, `""`, an empty array or an empty object.
pub fn remove_undefined_and_empty(map: &Map<String, Value>) -> Map<String, Value> {
    map.iter()
        .filter(|(_, value)| !is_empty_value(value))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

pub(crate) fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Number(_) | Value::Bool(_) => false,
    }
}
