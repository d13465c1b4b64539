//! Autocomplete item: the `{id, value}` pair returned to the host UI.

use serde::Serialize;
use serde_json::Value;

use crate::autocomplete::AutocompleteError;

/// One candidate shown in an autocomplete dropdown.
///
/// `value` is the visible label used for matching and sorting; `id` is what
/// the host stores when the item is selected. The label is never empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AutocompleteItem {
    id: Value,
    value: String,
}

impl AutocompleteItem {
    /// Build an item from a primitive value, labelled by `label` or, when
    /// absent, by the value itself.
    pub fn from_primitive(id: Value, label: Option<&str>) -> Result<Self, AutocompleteError> {
        let text = match &id {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            other => return Err(AutocompleteError::NonPrimitiveId(other.to_string())),
        };
        let value = label.map(str::to_string).unwrap_or(text);
        if value.is_empty() {
            return Err(AutocompleteError::EmptyLabel);
        }
        Ok(Self { id, value })
    }

    /// Build an item from labels known to be non-empty.
    pub(crate) fn from_static(id: &str, value: String) -> Self {
        Self {
            id: Value::String(id.to_string()),
            value,
        }
    }

    pub fn id(&self) -> &Value {
        &self.id
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}
