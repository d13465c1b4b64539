//! Tags parser: normalizes the many ways a user can enter resource tags.
//!
//! Accepted shapes:
//! - `{"Key": "k", "Value": "v"}`: a single tag
//! - `{"k1": "v1", "k2": "v2"}`: one tag per entry
//! - `"k1=v1\nk2=v2"`: one tag per non-blank line
//! - an array of any of the above

use serde_json::{Map, Value};

use super::{ParseError, display};
use crate::models::aws::Tag;

/// Parse a raw tags value into a flat list of tags.
pub fn tags(value: &Value) -> Result<Vec<Tag>, ParseError> {
    match value {
        Value::Null => Ok(Vec::new()),
        Value::String(raw) => parse_tag_string(raw),
        Value::Array(items) => {
            let mut parsed = Vec::new();
            for item in items {
                parsed.extend(tags(item)?);
            }
            Ok(parsed)
        }
        Value::Object(map) if map.contains_key("Key") => Ok(vec![tag_from_object(map)]),
        Value::Object(map) => Ok(map
            .iter()
            .map(|(key, value)| Tag::new(key.clone(), tag_text(value)))
            .collect()),
        Value::Number(_) | Value::Bool(_) => Err(ParseError::UnsupportedTags),
    }
}

fn parse_tag_string(raw: &str) -> Result<Vec<Tag>, ParseError> {
    raw.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            line.split_once('=')
                .map(|(key, value)| Tag::new(key.trim(), value.trim()))
                .ok_or_else(|| ParseError::MalformedTagString(line.to_string()))
        })
        .collect()
}

fn tag_from_object(map: &Map<String, Value>) -> Tag {
    Tag::new(
        map.get("Key").map(tag_text).unwrap_or_default(),
        map.get("Value").map(tag_text).unwrap_or_default(),
    )
}

fn tag_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        other => display(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const TAGS_STRING: &str =
        "First tag = First_value\nMiddle-tag=Middlevalue\nLast.tag    =Last#value";

    fn proper_tags() -> Vec<Tag> {
        vec![
            Tag::new("First tag", "First_value"),
            Tag::new("Middle-tag", "Middlevalue"),
            Tag::new("Last.tag", "Last#value"),
        ]
    }

    #[test]
    fn single_tag_object_is_wrapped() {
        let parsed = tags(&json!({"Key": "hello", "Value": "world"})).unwrap();
        assert_eq!(parsed, vec![Tag::new("hello", "world")]);
    }

    #[test]
    fn tag_array_passes_through() {
        let raw = serde_json::to_value(proper_tags()).unwrap();
        assert_eq!(tags(&raw).unwrap(), proper_tags());
    }

    #[test]
    fn tag_string_is_split_per_line() {
        assert_eq!(tags(&json!(TAGS_STRING)).unwrap(), proper_tags());
    }

    #[test]
    fn plain_object_keeps_entry_order() {
        let raw = json!({
            "First tag": "First_value",
            "Middle-tag": "Middlevalue",
            "Last.tag": "Last#value",
        });
        assert_eq!(tags(&raw).unwrap(), proper_tags());
    }

    #[test]
    fn array_of_tag_strings_is_flattened() {
        let raw = json!([TAGS_STRING, "anotherTag=anotherValue\nyetAnotherTag=someValue"]);
        let mut expected = proper_tags();
        expected.push(Tag::new("anotherTag", "anotherValue"));
        expected.push(Tag::new("yetAnotherTag", "someValue"));
        assert_eq!(tags(&raw).unwrap(), expected);
    }

    #[test]
    fn empty_inputs_yield_no_tags() {
        for raw in [Value::Null, json!(""), json!([]), json!({})] {
            assert!(tags(&raw).unwrap().is_empty(), "{raw} should be empty");
        }
    }

    #[test]
    fn value_may_contain_equals_sign() {
        let parsed = tags(&json!("query=a=b")).unwrap();
        assert_eq!(parsed, vec![Tag::new("query", "a=b")]);
    }

    #[test]
    fn line_without_separator_is_rejected() {
        let err = tags(&json!("someText")).unwrap_err();
        assert_eq!(err.to_string(), "Incorrectly formatted tag string: someText");
    }

    #[test]
    fn scalars_are_rejected() {
        for raw in [json!(5), json!(true), json!(false)] {
            assert_eq!(tags(&raw).unwrap_err(), ParseError::UnsupportedTags);
        }
    }
}
