// @awa-component: CRD-CredentialResolution
//
//! Credential and region resolution from action parameters and plugin settings.
//!
//! Action parameters take precedence over plugin settings. A source supplies a
//! credential only when its coerced value is non-empty.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::models::aws::{CredentialLabels, Credentials};
use crate::parsers::{self, ParseError};

/// Credential resolution errors.
#[derive(Debug, Error)]
pub enum CredentialsError {
    #[error("Could not resolve \"{0}\" from action parameters nor plugin settings")]
    Missing(String),

    #[error("Could not read region: \"{0}\" is missing from action parameters and plugin settings")]
    MissingRegion(String),

    #[error("Invalid value for \"{label}\": {source}")]
    InvalidValue {
        label: String,
        #[source]
        source: ParseError,
    },
}

/// Resolve access key, secret key and region.
pub fn read_credentials(
    params: &Map<String, Value>,
    settings: &Map<String, Value>,
    labels: &CredentialLabels,
) -> Result<Credentials, CredentialsError> {
    let access_key_id = first_text(params, settings, &labels.access_key)?
        .ok_or_else(|| CredentialsError::Missing(labels.access_key.clone()))?;
    let secret_access_key = first_text(params, settings, &labels.secret_key)?
        .ok_or_else(|| CredentialsError::Missing(labels.secret_key.clone()))?;
    let region = read_region(params, settings, &labels.region).map_err(|err| match err {
        CredentialsError::MissingRegion(label) => CredentialsError::Missing(label),
        other => other,
    })?;

    Ok(Credentials {
        access_key_id,
        secret_access_key,
        region,
    })
}

/// Read the region under `label` through the autocomplete parser, so both a
/// plain id and a selected `{id, value}` item are accepted.
pub fn read_region(
    params: &Map<String, Value>,
    settings: &Map<String, Value>,
    label: &str,
) -> Result<String, CredentialsError> {
    for source in [params, settings] {
        let Some(raw) = source.get(label) else {
            continue;
        };
        let region = parsers::autocomplete(raw).map_err(|source| CredentialsError::InvalidValue {
            label: label.to_string(),
            source,
        })?;
        let region = parsers::display(&region);
        if !region.is_empty() {
            return Ok(region);
        }
    }
    Err(CredentialsError::MissingRegion(label.to_string()))
}

/// Strip the credential labels from a parameter set. Absent labels are fine.
pub fn remove_credentials(
    params: &Map<String, Value>,
    labels: &CredentialLabels,
) -> Map<String, Value> {
    let stripped = labels.all();
    params
        .iter()
        .filter(|(key, _)| !stripped.contains(&key.as_str()))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

fn first_text(
    params: &Map<String, Value>,
    settings: &Map<String, Value>,
    label: &str,
) -> Result<Option<String>, CredentialsError> {
    for source in [params, settings] {
        let Some(raw) = source.get(label) else {
            continue;
        };
        let text = parsers::string(raw).map_err(|source| CredentialsError::InvalidValue {
            label: label.to_string(),
            source,
        })?;
        if !text.is_empty() {
            return Ok(Some(text));
        }
    }
    Ok(None)
}
