// @awa-component: RT-HandlerTraits
//
//! Handler traits: what a plugin registers under each action or
//! autocomplete name.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use awsplug_core::autocomplete::AutocompleteItem;
use awsplug_core::client::{ServiceClient, ServiceError};
use awsplug_core::models::aws::Credentials;
use awsplug_core::params::ParsedParameters;

use crate::error::PluginError;
use crate::plugin::ActionInvocation;

/// Everything an action handler receives for one call.
pub struct ActionContext<'a> {
    pub client: Arc<dyn ServiceClient>,
    /// Coerced method arguments, credentials removed.
    pub params: &'a ParsedParameters,
    pub region: &'a str,
    /// The invocation as the host sent it.
    pub action: &'a ActionInvocation,
    /// Plugin settings as the host sent them.
    pub settings: &'a Value,
}

/// Everything an autocomplete handler receives for one query.
pub struct AutocompleteContext<'a> {
    pub name: &'a str,
    pub query: &'a str,
    pub params: &'a ParsedParameters,
    pub settings: &'a ParsedParameters,
    /// `None` for handlers that don't need a client.
    pub client: Option<Arc<dyn ServiceClient>>,
    pub region: Option<String>,
    pub raw_params: &'a Value,
    pub raw_settings: &'a Value,
}

impl AutocompleteContext<'_> {
    pub fn client(&self) -> Result<&dyn ServiceClient, PluginError> {
        self.client
            .as_deref()
            .ok_or_else(|| PluginError::ClientUnavailable(self.name.to_string()))
    }
}

/// Action handler trait.
#[async_trait]
pub trait ActionHandler: Send + Sync {
    async fn handle(&self, ctx: ActionContext<'_>) -> Result<Value, PluginError>;
}

/// Autocomplete handler trait.
#[async_trait]
pub trait AutocompleteHandler: Send + Sync {
    async fn complete(
        &self,
        ctx: AutocompleteContext<'_>,
    ) -> Result<Vec<AutocompleteItem>, PluginError>;

    /// Whether credentials must resolve and a client be built before
    /// [`complete`](Self::complete) runs.
    fn requires_client(&self) -> bool {
        true
    }
}

/// Builds a service client from resolved credentials.
pub trait ServiceFactory: Send + Sync {
    fn connect(&self, credentials: &Credentials) -> Result<Arc<dyn ServiceClient>, ServiceError>;
}

impl<F> ServiceFactory for F
where
    F: Fn(&Credentials) -> Result<Arc<dyn ServiceClient>, ServiceError> + Send + Sync,
{
    fn connect(&self, credentials: &Credentials) -> Result<Arc<dyn ServiceClient>, ServiceError> {
        self(credentials)
    }
}
