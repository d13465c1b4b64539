// @awa-component: RT-RemoteMethod
//
//! Generic action handler that forwards one call to a named client method.

use async_trait::async_trait;
use serde_json::Value;

use awsplug_core::client::ServiceError;
use awsplug_core::params::{ParsedParameters, remove_undefined_and_empty};

use crate::error::PluginError;
use crate::handler::{ActionContext, ActionHandler};

/// Builds a call payload from the coerced arguments and the region.
pub type PayloadFn = dyn Fn(&ParsedParameters, &str) -> Value + Send + Sync;

/// Action handler bound to one client method.
///
/// The payload defaults to the coerced arguments. Top-level nil and empty
/// entries are removed before the call.
pub struct RemoteMethod {
    function: String,
    payload: Option<Box<PayloadFn>>,
}

impl RemoteMethod {
    pub fn new(function: impl Into<String>) -> Self {
        Self {
            function: function.into(),
            payload: None,
        }
    }

    pub fn with_payload<F>(mut self, payload: F) -> Self
    where
        F: Fn(&ParsedParameters, &str) -> Value + Send + Sync + 'static,
    {
        self.payload = Some(Box::new(payload));
        self
    }

    pub fn function(&self) -> &str {
        &self.function
    }
}

#[async_trait]
impl ActionHandler for RemoteMethod {
    async fn handle(&self, ctx: ActionContext<'_>) -> Result<Value, PluginError> {
        if !ctx.client.has_method(&self.function) {
            return Err(ServiceError::UnknownMethod(self.function.clone()).into());
        }

        let payload = match &self.payload {
            Some(build) => build(ctx.params, ctx.region),
            None => Value::Object(ctx.params.clone()),
        };
        let payload = match payload {
            Value::Object(map) => Value::Object(remove_undefined_and_empty(&map)),
            other => other,
        };

        log::debug!("Calling client method {}", self.function);
        Ok(ctx.client.call(&self.function, payload).await?)
    }
}
