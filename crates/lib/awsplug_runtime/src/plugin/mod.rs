// @awa-component: RT-Plugin
//
//! Plugin registry and per-request pipeline.
//!
//! An action call runs: credentials → client → method arguments → handler →
//! result normalization. An autocomplete call maps the raw parameter lists,
//! builds a client when the handler needs one, and hands over to the handler.
//!
//! The method catalog is shared behind an `Arc`. Reloading means building a
//! new [`Plugin`] from a freshly loaded [`PluginConfig`].

use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use awsplug_core::autocomplete::AutocompleteItem;
use awsplug_core::config::PluginConfig;
use awsplug_core::credentials::{read_credentials, read_region, remove_credentials};
use awsplug_core::models::aws::CredentialLabels;
use awsplug_core::params::{
    ParsedParameters, map_parameters, prepare_parameters_for_another_method_call,
    raw_values, read_action_arguments,
};

use crate::error::PluginError;
use crate::handler::{
    ActionContext, ActionHandler, AutocompleteContext, AutocompleteHandler, ServiceFactory,
};

/// Returned in place of an empty action result.
pub const OPERATION_FINISHED_SUCCESSFULLY_MESSAGE: &str = "Operation finished successfully";

/// The method an action targets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodRef {
    pub name: String,
}

/// One action invocation as sent by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionInvocation {
    pub method: MethodRef,
    /// A `{name: value}` object or a list of raw parameters.
    #[serde(default)]
    pub params: Value,
}

impl ActionInvocation {
    pub fn new(method: impl Into<String>, params: Value) -> Self {
        Self {
            method: MethodRef {
                name: method.into(),
            },
            params,
        }
    }
}

/// Replace nil and empty results with the success message.
pub fn normalize_result(result: Value) -> Value {
    let empty = match &result {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Number(_) | Value::Bool(_) => false,
    };
    if empty {
        Value::String(OPERATION_FINISHED_SUCCESSFULLY_MESSAGE.to_string())
    } else {
        result
    }
}

/// A bootstrapped plugin.
pub struct Plugin {
    config: Arc<PluginConfig>,
    labels: CredentialLabels,
    factory: Arc<dyn ServiceFactory>,
    actions: Vec<(String, Arc<dyn ActionHandler>)>,
    autocompletes: Vec<(String, Arc<dyn AutocompleteHandler>)>,
}

impl Plugin {
    pub fn builder(
        factory: impl ServiceFactory + 'static,
        config: Arc<PluginConfig>,
    ) -> PluginBuilder {
        PluginBuilder::new(factory, config)
    }

    pub fn config(&self) -> &Arc<PluginConfig> {
        &self.config
    }

    pub fn labels(&self) -> &CredentialLabels {
        &self.labels
    }

    /// Every registered name: actions first, then autocompletes, each in
    /// registration order.
    pub fn names(&self) -> Vec<&str> {
        self.actions
            .iter()
            .map(|(name, _)| name.as_str())
            .chain(self.autocompletes.iter().map(|(name, _)| name.as_str()))
            .collect()
    }

    /// Run one action.
    pub async fn invoke(
        &self,
        action: &ActionInvocation,
        settings: &Value,
    ) -> Result<Value, PluginError> {
        let name = action.method.name.as_str();
        let handler = lookup(&self.actions, name)?;
        log::debug!("Invoking action {name}");

        let raw_params = raw_values(&action.params)?;
        let raw_settings = raw_values(settings)?;

        let credentials = read_credentials(&raw_params, &raw_settings, &self.labels)?;
        let client = self.factory.connect(&credentials)?;

        let method = self.config.method(name)?;
        let params = read_action_arguments(method, &raw_params, &self.labels)?;

        let result = handler
            .handle(ActionContext {
                client,
                params: &params,
                region: &credentials.region,
                action,
                settings,
            })
            .await
            .inspect_err(|err| log::warn!("Action {name} failed: {err}"))?;

        Ok(normalize_result(result))
    }

    /// Run one autocomplete query. The handler sees both parameter sets with
    /// the credential labels removed.
    pub async fn autocomplete(
        &self,
        name: &str,
        query: &str,
        plugin_settings: &Value,
        action_params: &Value,
    ) -> Result<Vec<AutocompleteItem>, PluginError> {
        let handler = lookup(&self.autocompletes, name)?;
        log::debug!("Running autocomplete {name} for query {query:?}");

        let params = map_parameters(action_params)?;
        let settings = map_parameters(plugin_settings)?;

        let (client, region) = if handler.requires_client() {
            let credentials = read_credentials(&params, &settings, &self.labels)?;
            let client = self.factory.connect(&credentials)?;
            (Some(client), Some(credentials.region))
        } else {
            (None, read_region(&params, &settings, &self.labels.region).ok())
        };
        let params = remove_credentials(&params, &self.labels);
        let settings = remove_credentials(&settings, &self.labels);

        handler
            .complete(AutocompleteContext {
                name,
                query,
                params: &params,
                settings: &settings,
                client,
                region,
                raw_params: action_params,
                raw_settings: plugin_settings,
            })
            .await
    }

    /// Coerce parameters for calling `method_name` from inside a handler.
    pub fn prepare_parameters(
        &self,
        method_name: &str,
        params: &Map<String, Value>,
        additional: &Map<String, Value>,
    ) -> Result<ParsedParameters, PluginError> {
        Ok(prepare_parameters_for_another_method_call(
            &self.config,
            method_name,
            params,
            additional,
        )?)
    }
}

fn lookup<'a, H: ?Sized>(
    handlers: &'a [(String, Arc<H>)],
    name: &str,
) -> Result<&'a Arc<H>, PluginError> {
    handlers
        .iter()
        .find(|(registered, _)| registered == name)
        .map(|(_, handler)| handler)
        .ok_or_else(|| PluginError::UnknownHandler(name.to_string()))
}

/// Builder for [`Plugin`].
pub struct PluginBuilder {
    config: Arc<PluginConfig>,
    labels: CredentialLabels,
    factory: Arc<dyn ServiceFactory>,
    actions: Vec<(String, Arc<dyn ActionHandler>)>,
    autocompletes: Vec<(String, Arc<dyn AutocompleteHandler>)>,
}

impl PluginBuilder {
    pub fn new(factory: impl ServiceFactory + 'static, config: Arc<PluginConfig>) -> Self {
        Self {
            config,
            labels: CredentialLabels::default(),
            factory: Arc::new(factory),
            actions: Vec::new(),
            autocompletes: Vec::new(),
        }
    }

    pub fn labels(mut self, labels: CredentialLabels) -> Self {
        self.labels = labels;
        self
    }

    pub fn action(
        mut self,
        name: impl Into<String>,
        handler: impl ActionHandler + 'static,
    ) -> Self {
        let handler: Arc<dyn ActionHandler> = Arc::new(handler);
        self.actions.push((name.into(), handler));
        self
    }

    pub fn autocomplete(
        mut self,
        name: impl Into<String>,
        handler: impl AutocompleteHandler + 'static,
    ) -> Self {
        let handler: Arc<dyn AutocompleteHandler> = Arc::new(handler);
        self.autocompletes.push((name.into(), handler));
        self
    }

    /// Check names are unique and every action has a catalog entry.
    pub fn build(self) -> Result<Plugin, PluginError> {
        let mut seen = HashSet::new();
        let names = self
            .actions
            .iter()
            .map(|(name, _)| name)
            .chain(self.autocompletes.iter().map(|(name, _)| name));
        for name in names {
            if !seen.insert(name.as_str()) {
                return Err(PluginError::DuplicateHandler(name.clone()));
            }
        }
        for (name, _) in &self.actions {
            self.config.method(name)?;
        }

        log::info!(
            "Plugin ready with {} actions and {} autocompletes",
            self.actions.len(),
            self.autocompletes.len()
        );
        Ok(Plugin {
            config: self.config,
            labels: self.labels,
            factory: self.factory,
            actions: self.actions,
            autocompletes: self.autocompletes,
        })
    }
}
