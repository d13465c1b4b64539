// @awa-component: TAG-TagSpecification

//! Tag specification builder for create-style calls that accept
//! `TagSpecifications`.

use serde_json::Value;
use thiserror::Error;

use crate::models::aws::{Tag, TagSpecification};
use crate::parsers::{ParseError, tags::tags};

#[derive(Debug, Error)]
pub enum TagsError {
    #[error("Resource type must be provided to build a tag specification")]
    EmptyResourceType,

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Build the tag specifications for one resource type.
///
/// Returns an empty list when every given entry is nil or `""`.
pub fn build_tag_specification(
    resource_type: &str,
    raw_tags: &Value,
) -> Result<Vec<TagSpecification>, TagsError> {
    if resource_type.is_empty() {
        return Err(TagsError::EmptyResourceType);
    }

    let entries = match raw_tags {
        Value::Array(items) => items.clone(),
        other => vec![other.clone()],
    };

    let present: Vec<&Value> = entries.iter().filter(|e| !is_blank(e)).collect();
    if present.is_empty() {
        return Ok(Vec::new());
    }

    let mut collected: Vec<Tag> = Vec::new();
    for entry in present {
        let decoded = match entry {
            Value::String(raw) => try_parse_json(raw),
            other => other.clone(),
        };
        collected.extend(tags(&decoded)?);
    }

    Ok(vec![TagSpecification {
        resource_type: resource_type.to_string(),
        tags: collected,
    }])
}

/// Decode `raw` as JSON, or keep it as a plain string when it isn't JSON.
pub fn try_parse_json(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

fn is_blank(value: &Value) -> bool {
    matches!(value, Value::Null) || matches!(value, Value::String(s) if s.is_empty())
}
