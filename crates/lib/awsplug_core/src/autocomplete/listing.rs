//! Listing projection: autocomplete items from a remote list-style call.

use serde_json::{Map, Value};

use super::{AutocompleteError, AutocompleteItem, filter_items_by_query};
use crate::client::ServiceClient;
use crate::path::DotPath;

/// A list-style remote method and where to find the items in its response.
#[derive(Debug, Clone)]
pub struct ListingSource {
    method: String,
    payload: Map<String, Value>,
    array_path: Option<DotPath>,
    value_path: Option<DotPath>,
}

impl ListingSource {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            payload: Map::new(),
            array_path: None,
            value_path: None,
        }
    }

    pub fn with_payload(mut self, payload: Map<String, Value>) -> Self {
        self.payload = payload;
        self
    }

    /// Path to the array inside the response. Without it the response itself
    /// must be the array.
    pub fn with_array_path(mut self, path: &str) -> Self {
        self.array_path = Some(DotPath::parse(path));
        self
    }

    /// Path to the value inside each element. Without it the element itself
    /// is the value.
    pub fn with_value_path(mut self, path: &str) -> Self {
        self.value_path = Some(DotPath::parse(path));
        self
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    /// Call the method once and project the response into items.
    pub async fn fetch(
        &self,
        client: &dyn ServiceClient,
    ) -> Result<Vec<AutocompleteItem>, AutocompleteError> {
        if !client.has_method(&self.method) {
            return Err(AutocompleteError::UnknownMethod(self.method.clone()));
        }
        log::debug!("Listing autocomplete items via {}", self.method);
        let response = client
            .call(&self.method, Value::Object(self.payload.clone()))
            .await?;
        project_items(
            &response,
            self.array_path.as_ref(),
            self.value_path.as_ref(),
        )
    }

    /// Fetch, then filter by `query`.
    pub async fn search(
        &self,
        client: &dyn ServiceClient,
        query: &str,
    ) -> Result<Vec<AutocompleteItem>, AutocompleteError> {
        Ok(filter_items_by_query(self.fetch(client).await?, query))
    }
}

/// Project a listing response into items.
pub fn project_items(
    response: &Value,
    array_path: Option<&DotPath>,
    value_path: Option<&DotPath>,
) -> Result<Vec<AutocompleteItem>, AutocompleteError> {
    let array = match array_path {
        Some(path) => path
            .get(response)
            .ok_or_else(|| AutocompleteError::MissingArrayPath(path.to_string()))?,
        None => response,
    };
    let elements = array.as_array().ok_or(AutocompleteError::NotAnArray)?;

    elements
        .iter()
        .map(|element| {
            let value = match value_path {
                Some(path) => path
                    .get(element)
                    .filter(|v| !v.is_null())
                    .ok_or_else(|| AutocompleteError::MissingValuePath(path.to_string()))?,
                None => element,
            };
            AutocompleteItem::from_primitive(value.clone(), None)
        })
        .collect()
}
