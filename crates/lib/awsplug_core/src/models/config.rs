// @awa-component: CFG-Schema
//
//! Method catalog models.
//!
//! Types matching the plugin's `config.json`: the list of methods a plugin
//! exposes and the parameter definitions used to coerce their arguments.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::parsers::ParserType;

/// Plugin configuration: the method catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PluginConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub methods: Vec<MethodDefinition>,
}

/// One method the plugin exposes to the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodDefinition {
    pub name: String,
    /// Human-readable name for the host UI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view_name: Option<String>,
    #[serde(default)]
    pub params: Vec<ParameterDefinition>,
}

impl MethodDefinition {
    /// Find the definition of a parameter by name.
    pub fn param(&self, name: &str) -> Option<&ParameterDefinition> {
        self.params.iter().find(|p| p.name == name)
    }
}

/// Declares one configurable input of a method.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterDefinition {
    pub name: String,
    /// Declared type tag, e.g. `"string"`, `"vault"`, `"autocomplete"`.
    #[serde(rename = "type")]
    pub param_type: ParserType,
    /// Overrides `type` when the UI widget and the coerced value differ.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parser_type: Option<ParserType>,
    #[serde(default)]
    pub required: bool,
    /// Raw fallback used when the host sends no value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

impl ParameterDefinition {
    /// The parser actually applied to this parameter's value.
    pub fn parser(&self) -> ParserType {
        self.parser_type.unwrap_or(self.param_type)
    }
}
