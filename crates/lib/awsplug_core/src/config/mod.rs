// @awa-component: CFG-MethodCatalog
//
//! Configuration module: loading and lookup of the plugin's method catalog.
//!
//! The catalog is read once and shared behind an `Arc` by whoever builds the
//! plugin. To pick up a changed file, load a new [`PluginConfig`] and build a
//! new plugin from it; requests already running keep the catalog they
//! started with.

use std::collections::HashSet;
use std::path::Path;

use thiserror::Error;

pub use crate::models::config::{MethodDefinition, ParameterDefinition, PluginConfig};

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not retrieve the plugin configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid plugin configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Could not find a method \"{0}\" in config.json")]
    MethodNotFound(String),

    #[error("Method \"{0}\" is defined more than once in config.json")]
    DuplicateMethod(String),

    #[error("Parameter \"{param}\" is defined more than once on method \"{method}\"")]
    DuplicateParameter { method: String, param: String },
}

impl PluginConfig {
    /// Read and validate the catalog from a `config.json` file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&raw)?;
        log::info!(
            "Loaded {} method definitions from {}",
            config.methods.len(),
            path.display()
        );
        Ok(config)
    }

    /// Parse and validate the catalog from a JSON string.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Look up a method definition by name.
    pub fn method(&self, name: &str) -> Result<&MethodDefinition, ConfigError> {
        self.methods
            .iter()
            .find(|m| m.name == name)
            .ok_or_else(|| ConfigError::MethodNotFound(name.to_string()))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let mut method_names = HashSet::new();
        for method in &self.methods {
            if !method_names.insert(method.name.as_str()) {
                return Err(ConfigError::DuplicateMethod(method.name.clone()));
            }
            let mut param_names = HashSet::new();
            for param in &method.params {
                if !param_names.insert(param.name.as_str()) {
                    return Err(ConfigError::DuplicateParameter {
                        method: method.name.clone(),
                        param: param.name.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::parsers::ParserType;
    use serde_json::json;

    const CATALOG: &str = r#"{
        "name": "aws-ec2",
        "methods": [
            {
                "name": "createInstance",
                "viewName": "Create Instance",
                "params": [
                    { "name": "REGION", "type": "autocomplete", "required": true },
                    { "name": "IMAGE_ID", "type": "string", "required": true },
                    { "name": "COUNT", "type": "string", "parserType": "number", "default": 1 },
                    { "name": "TAGS", "type": "text" }
                ]
            },
            { "name": "listInstances" }
        ]
    }"#;

    #[test]
    fn parses_catalog_and_finds_methods() {
        let config = PluginConfig::from_json_str(CATALOG).unwrap();
        assert_eq!(config.name.as_deref(), Some("aws-ec2"));

        let method = config.method("createInstance").unwrap();
        assert_eq!(method.view_name.as_deref(), Some("Create Instance"));
        assert_eq!(method.params.len(), 4);

        let count = method.param("COUNT").unwrap();
        assert_eq!(count.param_type, ParserType::String);
        assert_eq!(count.parser(), ParserType::Number);
        assert_eq!(count.default, Some(json!(1)));
        assert!(!count.required);

        assert!(config.method("listInstances").unwrap().params.is_empty());
    }

    #[test]
    fn unknown_method_names_the_method() {
        let config = PluginConfig::from_json_str(CATALOG).unwrap();
        let err = config.method("deleteEverything").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Could not find a method \"deleteEverything\" in config.json"
        );
    }

    #[test]
    fn unknown_type_tag_fails_at_load() {
        let raw = r#"{"methods": [{"name": "m", "params": [{"name": "p", "type": "integer"}]}]}"#;
        let err = PluginConfig::from_json_str(raw).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
        assert!(err.to_string().contains("Can't resolve parser of type \"integer\""));
    }

    #[test]
    fn duplicate_definitions_are_rejected() {
        let raw = r#"{"methods": [{"name": "m"}, {"name": "m"}]}"#;
        assert!(matches!(
            PluginConfig::from_json_str(raw),
            Err(ConfigError::DuplicateMethod(name)) if name == "m"
        ));

        let raw = r#"{"methods": [{"name": "m", "params": [
            {"name": "p", "type": "string"}, {"name": "p", "type": "number"}
        ]}]}"#;
        assert!(matches!(
            PluginConfig::from_json_str(raw),
            Err(ConfigError::DuplicateParameter { .. })
        ));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CATALOG.as_bytes()).unwrap();

        let config = PluginConfig::load(file.path()).unwrap();
        assert_eq!(config.methods.len(), 2);
    }

    #[test]
    fn missing_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let err = PluginConfig::load(dir.path().join("config.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
