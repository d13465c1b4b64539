// @awa-component: ACP-QueryEngine
//
//! Autocomplete query engine.
//!
//! Candidates come from a remote listing ([`listing`]) or a static table
//! ([`regions`]); [`filter_items_by_query`] narrows them to what the user
//! typed, sorts by label and caps the result size.

pub mod listing;
pub mod regions;

use thiserror::Error;

use crate::client::ServiceError;
pub use crate::models::autocomplete::AutocompleteItem;

/// Most items returned to the host for a single query.
pub const MAX_AUTOCOMPLETE_RESULTS: usize = 50;

/// Autocomplete errors.
#[derive(Debug, Error)]
pub enum AutocompleteError {
    #[error("Method \"{0}\" doesn't exist on service")]
    UnknownMethod(String),

    #[error("Path \"{0}\" doesn't exist on method call response")]
    MissingArrayPath(String),

    #[error("Path \"{0}\" doesn't exist on elements of array")]
    MissingValuePath(String),

    #[error("Method call response is not an array")]
    NotAnArray,

    #[error("Could not find a region label for region id: \"{0}\"")]
    UnknownRegion(String),

    #[error("Autocomplete id must be a string, number or boolean, got {0}")]
    NonPrimitiveId(String),

    #[error("Autocomplete label must not be empty")]
    EmptyLabel,

    #[error(transparent)]
    Service(#[from] ServiceError),
}

/// Split a query into lower-cased tokens on runs of `.` and spaces.
pub fn query_words(query: &str) -> Vec<String> {
    query
        .split(['.', ' '])
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Keep items whose label contains every query token, sorted by label and
/// truncated to [`MAX_AUTOCOMPLETE_RESULTS`].
///
/// Matching ignores case; sorting does not.
pub fn filter_items_by_query(items: Vec<AutocompleteItem>, query: &str) -> Vec<AutocompleteItem> {
    let words = query_words(query);
    let mut matched: Vec<AutocompleteItem> = if words.is_empty() {
        items
    } else {
        items
            .into_iter()
            .filter(|item| {
                let label = item.value().to_lowercase();
                words.iter().all(|word| label.contains(word.as_str()))
            })
            .collect()
    };

    matched.sort_by(|a, b| a.value().cmp(b.value()));
    matched.truncate(MAX_AUTOCOMPLETE_RESULTS);
    matched
}
