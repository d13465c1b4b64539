// @awa-component: SVC-ServiceClient
//
//! Service client capability. Covers only what the plugin needs from a cloud
//! SDK client: a lookup for named operations and a way to call them.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Errors raised at the client boundary.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("No method \"{0}\" found on client!")]
    UnknownMethod(String),

    #[error("Call to \"{method}\" failed: {message}")]
    Call { method: String, message: String },

    #[error("Could not construct service client: {0}")]
    Connect(String),
}

/// A constructed client bound to one set of credentials.
#[async_trait]
pub trait ServiceClient: Send + Sync {
    /// Whether `method` is an operation this client exposes.
    fn has_method(&self, method: &str) -> bool;

    /// Invoke `method` with a plain payload object.
    async fn call(&self, method: &str, payload: Value) -> Result<Value, ServiceError>;
}
