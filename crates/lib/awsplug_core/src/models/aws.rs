//! AWS-facing shapes: credentials, credential labels and resource tags.

use serde::{Deserialize, Serialize};

/// Default parameter name holding the access key id.
pub const DEFAULT_ACCESS_KEY_LABEL: &str = "AWS_ACCESS_KEY_ID";
/// Default parameter name holding the secret access key.
pub const DEFAULT_SECRET_KEY_LABEL: &str = "AWS_SECRET_ACCESS_KEY";
/// Default parameter name holding the region.
pub const DEFAULT_REGION_LABEL: &str = "REGION";

/// Credentials handed to the service client constructor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub region: String,
}

/// Parameter names under which credentials are looked up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct CredentialLabels {
    pub access_key: String,
    pub secret_key: String,
    pub region: String,
}

impl CredentialLabels {
    pub fn new(
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            access_key: access_key.into(),
            secret_key: secret_key.into(),
            region: region.into(),
        }
    }

    /// All three labels, in access key → secret key → region order.
    pub fn all(&self) -> [&str; 3] {
        [&self.access_key, &self.secret_key, &self.region]
    }
}

impl Default for CredentialLabels {
    fn default() -> Self {
        Self::new(
            DEFAULT_ACCESS_KEY_LABEL,
            DEFAULT_SECRET_KEY_LABEL,
            DEFAULT_REGION_LABEL,
        )
    }
}

/// A single AWS resource tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Tag {
    pub key: String,
    pub value: String,
}

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Tags applied to resources of one type at creation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TagSpecification {
    pub resource_type: String,
    pub tags: Vec<Tag>,
}
